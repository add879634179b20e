use super::*;

#[test]
fn lerp_channel_truncates_toward_zero() {
    // 0 + 255 * 0.5 = 127.5 -> 127, never 128.
    assert_eq!(lerp_channel(0, 255, 0.5), 127);
    // 10 + 9.9 = 19.9 -> 19.
    assert_eq!(lerp_channel(10, 20, 0.99), 19);
    // Descending anchors: 20 - 9.9 = 10.1 -> 10.
    assert_eq!(lerp_channel(20, 10, 0.99), 10);
    assert_eq!(lerp_channel(42, 42, 0.3), 42);
    assert_eq!(lerp_channel(0, 255, 0.0), 0);
}

#[test]
fn mul_div255_matches_rounded_scaling() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(100, 255), 100);
    assert_eq!(mul_div255_u8(128, 128), 64);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn add_sat_clamps_at_255() {
    assert_eq!(add_sat_u8(200, 100), 255);
    assert_eq!(add_sat_u8(1, 2), 3);
}
