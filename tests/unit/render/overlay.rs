use super::*;

#[test]
fn missing_path_is_absent_not_an_error() {
    let overlay = Overlay::from_path(Path::new("definitely/not/here.png"), 64).unwrap();
    assert!(overlay.is_absent());
}

#[test]
fn zero_hint_is_rejected() {
    assert!(Overlay::from_path(Path::new("x.png"), 0).is_err());
}

#[test]
fn from_image_wraps_the_raster() {
    let overlay = Overlay::from_image(RgbaImage::new(4, 4));
    assert!(!overlay.is_absent());
}

#[test]
fn raster_file_roundtrips_through_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");

    let logo = RgbaImage::from_pixel(6, 3, image::Rgba([1, 2, 3, 200]));
    logo.save(&path).unwrap();

    match Overlay::from_path(&path, 64).unwrap() {
        Overlay::Raster(img) => {
            assert_eq!(img.dimensions(), (6, 3));
            assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 200]);
        }
        Overlay::Absent => panic!("expected a raster overlay"),
    }
}

#[test]
fn svg_rasterizes_at_the_hint_preserving_aspect() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="5">
        <rect width="10" height="5" fill="#ff0000"/></svg>"##;
    match Overlay::from_svg_bytes(svg, 100).unwrap() {
        Overlay::Raster(img) => {
            assert_eq!(img.dimensions(), (100, 50));
            // Opaque red after unpremultiplying.
            assert_eq!(img.get_pixel(50, 25).0, [255, 0, 0, 255]);
        }
        Overlay::Absent => panic!("expected a raster overlay"),
    }
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(Overlay::from_svg_bytes(br#"<svg"#, 64).is_err());
}
