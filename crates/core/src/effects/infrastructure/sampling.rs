//! Nearest-neighbour resampling by a fractional block factor.
//!
//! A block of `factor` source pixels maps to one sample; upscaling maps it
//! back, so a round trip turns an image into `factor`-sized flat blocks (the
//! last block of a row or column may be partial).

/// Number of samples covering `len` pixels with blocks of `factor` pixels.
pub fn block_count(len: usize, factor: f64) -> usize {
    ((len as f64 / factor).ceil() as usize).clamp(1, len.max(1))
}

/// Downscale by `factor`, taking the pixel nearest each block's centre.
pub fn downscale_nearest(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f64,
) -> (Vec<u8>, usize, usize) {
    let new_w = block_count(width, factor);
    let new_h = block_count(height, factor);
    let mut out = vec![0u8; new_w * new_h * channels];

    for y in 0..new_h {
        let sy = (((y as f64 + 0.5) * factor) as usize).min(height - 1);
        for x in 0..new_w {
            let sx = (((x as f64 + 0.5) * factor) as usize).min(width - 1);
            let src = (sy * width + sx) * channels;
            let dst = (y * new_w + x) * channels;
            out[dst..dst + channels].copy_from_slice(&data[src..src + channels]);
        }
    }

    (out, new_w, new_h)
}

/// Upscale a `width x height` sample grid back to `target_w x target_h`,
/// each sample covering a `factor`-pixel block.
pub fn upscale_nearest(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f64,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; target_w * target_h * channels];

    for y in 0..target_h {
        let sy = ((y as f64 / factor) as usize).min(height - 1);
        for x in 0..target_w {
            let sx = ((x as f64 / factor) as usize).min(width - 1);
            let src = (sy * width + sx) * channels;
            let dst = (y * target_w + x) * channels;
            out[dst..dst + channels].copy_from_slice(&data[src..src + channels]);
        }
    }

    out
}
