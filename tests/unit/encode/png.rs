use super::*;

#[test]
fn payload_round_trips_losslessly() {
    let mut raster = RasterImage::new(7).unwrap();
    for (i, px) in raster.data_mut().chunks_exact_mut(4).enumerate() {
        px.copy_from_slice(&[i as u8, (i * 3) as u8, 200, 255]);
    }

    let png = encode_png(&raster).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (7, 7));
    assert_eq!(decoded.into_raw(), raster.data());
}

#[test]
fn encoding_is_deterministic() {
    let raster = RasterImage::new(16).unwrap();
    assert_eq!(encode_png(&raster).unwrap(), encode_png(&raster).unwrap());
}
