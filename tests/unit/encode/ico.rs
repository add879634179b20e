use super::*;

use crate::encode::png::encode_png;
use crate::foundation::core::RasterImage;

fn entry(size: u32, payload: &[u8]) -> IcoEntry {
    IcoEntry::new(size, payload.to_vec())
}

fn dir_record(buf: &[u8], i: usize) -> &[u8] {
    &buf[HEADER_LEN + i * DIR_ENTRY_LEN..HEADER_LEN + (i + 1) * DIR_ENTRY_LEN]
}

fn u32_at(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[test]
fn two_entry_scenario_matches_the_offset_formula() {
    let p16 = b"payload-16";
    let p32 = b"payload-32-longer";
    let buf = encode_ico(&[entry(16, p16), entry(32, p32)]).unwrap();

    // Header: reserved=0, type=1, count=2, little-endian.
    assert_eq!(&buf[..6], &[0, 0, 1, 0, 2, 0]);

    let first = dir_record(&buf, 0);
    assert_eq!(first[0], 16); // width byte
    assert_eq!(first[1], 16); // height byte
    assert_eq!(&first[2..8], &[0, 0, 1, 0, 32, 0]); // colors, reserved, planes, bits
    assert_eq!(u32_at(&first[8..12]) as usize, p16.len());
    assert_eq!(u32_at(&first[12..16]), 6 + 16 * 2);

    let second = dir_record(&buf, 1);
    assert_eq!(u32_at(&second[8..12]) as usize, p32.len());
    assert_eq!(u32_at(&second[12..16]) as usize, 38 + p16.len());

    assert_eq!(buf.len(), 38 + p16.len() + p32.len());
}

#[test]
fn payload_bytes_sit_at_their_declared_offsets() {
    let entries = [entry(48, b"AAAA"), entry(64, b"BBBBBBB"), entry(128, b"C")];
    let buf = encode_ico(&entries).unwrap();

    for (i, e) in entries.iter().enumerate() {
        let rec = dir_record(&buf, i);
        let len = u32_at(&rec[8..12]) as usize;
        let off = u32_at(&rec[12..16]) as usize;
        assert_eq!(len, e.payload.len());
        assert_eq!(&buf[off..off + len], e.payload.as_slice());
    }
}

#[test]
fn dimension_byte_encodes_256_as_zero() {
    assert_eq!(dimension_byte(1), 1);
    assert_eq!(dimension_byte(255), 255);
    assert_eq!(dimension_byte(256), 0);
}

#[test]
fn boundary_sizes_255_256_257() {
    let buf = encode_ico(&[
        entry(255, b"aa"),
        entry(256, b"bb"),
        entry(257, b"cc"),
    ])
    .unwrap();

    // 257 is excluded entirely; 255 stays literal; 256 becomes 0.
    assert_eq!(&buf[4..6], &[2, 0]);
    assert_eq!(dir_record(&buf, 0)[0], 255);
    assert_eq!(dir_record(&buf, 1)[0], 0);
    assert_eq!(buf.len(), 6 + 16 * 2 + 4);
    assert!(!buf.windows(2).any(|w| w == b"cc"));
}

#[test]
fn oversize_only_input_is_nothing_to_encode() {
    let err = encode_ico(&[entry(512, b"huge")]).unwrap_err();
    assert!(err.to_string().contains("nothing to encode"));
    assert!(encode_ico(&[]).is_err());
}

#[test]
fn zero_size_entry_is_rejected() {
    assert!(matches!(
        encode_ico(&[entry(0, b"x")]),
        Err(IconforgeError::Validation(_))
    ));
}

#[test]
fn entry_order_is_preserved() {
    let buf = encode_ico(&[entry(128, b"first"), entry(16, b"second")]).unwrap();
    assert_eq!(dir_record(&buf, 0)[0], 128);
    assert_eq!(dir_record(&buf, 1)[0], 16);
    let off0 = u32_at(&dir_record(&buf, 0)[12..16]) as usize;
    assert_eq!(&buf[off0..off0 + 5], b"first");
}

#[test]
fn real_png_payloads_round_trip_through_the_container() {
    let mut rasters = Vec::new();
    for size in [16u32, 32] {
        let mut r = RasterImage::new(size).unwrap();
        for px in r.data_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&[10, 20, 30, 255]);
        }
        rasters.push(r);
    }
    let entries: Vec<IcoEntry> = rasters
        .iter()
        .map(|r| IcoEntry::new(r.side(), encode_png(r).unwrap()))
        .collect();

    let buf = encode_ico(&entries).unwrap();
    for (i, e) in entries.iter().enumerate() {
        let rec = dir_record(&buf, i);
        let len = u32_at(&rec[8..12]) as usize;
        let off = u32_at(&rec[12..16]) as usize;
        let decoded = image::load_from_memory(&buf[off..off + len]).unwrap();
        assert_eq!(decoded.width(), e.size);
        assert_eq!(decoded.height(), e.size);
    }
}
