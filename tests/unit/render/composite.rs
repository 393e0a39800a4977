use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_opaque_dst_stays_opaque_and_blends_color() {
    let dst = [255, 255, 255, 255];
    let src = [0, 0, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 127);
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}

#[test]
fn over_dst_transparent_keeps_straight_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn clear_uncovered_zeroes_outside_pixels() {
    let mut buf = vec![9u8; 8];
    clear_uncovered_in_place(&mut buf, &[true, false]);
    assert_eq!(buf, vec![9, 9, 9, 9, 0, 0, 0, 0]);
}
