/// Kernel radius in standard deviations; weights beyond 3σ are negligible.
const SIGMA_SPAN: f64 = 3.0;

/// Below this σ the kernel collapses to a single tap.
const MIN_SIGMA: f64 = 1e-3;

/// Precompute a normalised 1D Gaussian kernel for standard deviation `sigma`.
///
/// The kernel has `2 * ceil(3σ) + 1` taps, matching the `kernel_size / 6`
/// convention in reverse. A non-positive `sigma` yields the identity kernel.
pub fn gaussian_kernel_1d(sigma: f64) -> Vec<f32> {
    if !(sigma > MIN_SIGMA) {
        return vec![1.0];
    }
    let half = (SIGMA_SPAN * sigma).ceil() as usize;
    let kernel_size = 2 * half + 1;
    let mut kernel_f64: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half as f64;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Convenience wrapper that builds the kernel and allocates its own temp buffer.
#[cfg(test)]
pub fn separable_gaussian_blur(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: f64,
) {
    let kernel = gaussian_kernel_1d(sigma);
    let mut temp = Vec::new();
    separable_gaussian_blur_with_kernel(data, width, height, channels, &kernel, &mut temp);
}

/// Apply a separable Gaussian blur using a pre-computed kernel, reusing `temp`.
///
/// Samples past the buffer edges replicate the nearest edge pixel.
pub fn separable_gaussian_blur_with_kernel(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = kernel_size / 2;

    let needed = width * height * channels;
    temp.resize(needed, 0.0);

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half as isize)
                        .max(0)
                        .min((width - 1) as isize) as usize;
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half as isize)
                        .max(0)
                        .min((height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
