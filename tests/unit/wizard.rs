use super::*;

fn opaque_icon(side: u32, rgba: [u8; 4]) -> RasterImage {
    let mut r = RasterImage::new(side).unwrap();
    for px in r.data_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
    r
}

#[test]
fn panel_has_the_wizard_dimensions_and_gradient_top() {
    let panel = render_wizard_panel(&opaque_icon(128, [0, 0, 0, 255])).unwrap();
    assert_eq!((panel.width(), panel.height()), PANEL_SIZE);
    // (0, 0) is outside the icon box, so it carries the pure top color.
    assert_eq!(panel.get_pixel(0, 0).0, PANEL_TOP);
}

#[test]
fn panel_centers_the_icon_in_the_upper_third() {
    let panel = render_wizard_panel(&opaque_icon(128, [255, 255, 255, 255])).unwrap();
    // Icon box: x in [32, 132), y in [80, 180).
    assert_eq!(panel.get_pixel(82, 130).0, [255, 255, 255]);
    assert_ne!(panel.get_pixel(82, 20).0, [255, 255, 255]);
}

#[test]
fn transparent_icon_leaves_the_badge_white() {
    let badge = render_wizard_badge(&RasterImage::new(64).unwrap()).unwrap();
    assert_eq!((badge.width(), badge.height()), (BADGE_SIZE, BADGE_SIZE));
    assert!(badge.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn badge_composites_the_icon_over_white() {
    let badge = render_wizard_badge(&opaque_icon(64, [10, 20, 30, 255])).unwrap();
    assert_eq!(badge.get_pixel(27, 27).0, [10, 20, 30]);
}

#[test]
fn bmp_stream_has_the_bitmap_magic() {
    let panel = render_wizard_panel(&opaque_icon(128, [0, 0, 0, 255])).unwrap();
    let bmp = encode_bmp(&panel).unwrap();
    assert_eq!(&bmp[..2], b"BM");
}
