/// Source-over composite of one pixel onto another at `opacity`.
///
/// RGB pixels are treated as opaque; RGBA pixels use straight
/// (non-premultiplied) alpha.
pub fn blend_pixel(dst: &mut [u8], src: &[u8], opacity: f32) {
    debug_assert_eq!(dst.len(), src.len());
    let opacity = opacity.clamp(0.0, 1.0);

    if dst.len() == 4 {
        let sa = src[3] as f32 / 255.0 * opacity;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= f32::EPSILON {
            dst.fill(0);
            return;
        }
        for c in 0..3 {
            let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
            dst[c] = to_u8(v);
        }
        dst[3] = to_u8(out_a * 255.0);
    } else {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = to_u8(s as f32 * opacity + *d as f32 * (1.0 - opacity));
        }
    }
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_linear_mix() {
        let mut dst = [0u8, 100, 200];
        blend_pixel(&mut dst, &[200, 100, 0], 0.25);
        assert_eq!(dst, [50, 100, 150]);
    }

    #[test]
    fn test_full_opacity_replaces() {
        let mut dst = [1u8, 2, 3];
        blend_pixel(&mut dst, &[9, 8, 7], 1.0);
        assert_eq!(dst, [9, 8, 7]);
    }

    #[test]
    fn test_zero_opacity_keeps() {
        let mut dst = [1u8, 2, 3, 255];
        blend_pixel(&mut dst, &[9, 8, 7, 255], 0.0);
        assert_eq!(dst, [1, 2, 3, 255]);
    }

    #[test]
    fn test_rgba_over_opaque_stays_opaque() {
        let mut dst = [0u8, 0, 0, 255];
        blend_pixel(&mut dst, &[0, 150, 255, 255], 0.8);
        assert_eq!(dst, [0, 120, 204, 255]);
    }

    #[test]
    fn test_rgba_over_transparent_takes_source_colour() {
        let mut dst = [0u8, 0, 0, 0];
        blend_pixel(&mut dst, &[100, 50, 25, 255], 0.5);
        assert_eq!(dst, [100, 50, 25, 128]);
    }

    #[test]
    fn test_transparent_over_transparent_is_cleared() {
        let mut dst = [5u8, 5, 5, 0];
        blend_pixel(&mut dst, &[9, 9, 9, 0], 1.0);
        assert_eq!(dst, [0, 0, 0, 0]);
    }
}
