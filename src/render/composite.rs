use crate::foundation::math::mul_div255_u16;

pub type StraightRgba8 = [u8; 4];

/// Source-over for straight (non-premultiplied) RGBA8, using the source alpha as the mask.
///
/// Over an opaque destination this reduces to `src * sa + dst * (1 - sa)` per color channel and the
/// result stays opaque.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u16::from(dst[3]);
    let inv = 255u16 - sa;
    let dst_w = mul_div255_u16(da, inv);
    let out_a = sa + dst_w;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a.min(255) as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * u32::from(sa) + u32::from(dst[i]) * u32::from(dst_w);
        let den = u32::from(out_a);
        out[i] = ((num + den / 2) / den).min(255) as u8;
    }
    out
}

/// Clear every pixel whose coverage entry is `false` to transparent.
pub fn clear_uncovered_in_place(dst: &mut [u8], coverage: &[bool]) {
    for (px, &inside) in dst.chunks_exact_mut(4).zip(coverage) {
        if !inside {
            px.copy_from_slice(&[0, 0, 0, 0]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
