use std::cell::RefCell;

use crate::effects::domain::region_effect::{check_inputs, EffectError, RegionEffect};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::gaussian;

/// Gaussian blur confined to a region.
///
/// Produces the same pixels as blurring a full copy of the image and then
/// copying the region back: the blur runs on the region grown by the kernel
/// half-width (clamped to the frame, edges replicated), so every tap that
/// lands inside the region sees real neighbours.
pub struct GaussianBlurEffect {
    radius: f64,
    kernel: Vec<f32>,
    blur_temp: RefCell<Vec<f32>>,
}

impl GaussianBlurEffect {
    /// `radius` is the Gaussian standard deviation in pixels.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            kernel: gaussian::gaussian_kernel_1d(radius),
            blur_temp: RefCell::new(Vec::new()),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn half_width(&self) -> i32 {
        (self.kernel.len() / 2) as i32
    }
}

impl RegionEffect for GaussianBlurEffect {
    fn apply(
        &self,
        source: &Frame,
        target: &mut Frame,
        region: &Region,
    ) -> Result<(), EffectError> {
        check_inputs(source, target, region)?;

        if self.kernel.len() <= 1 {
            target.copy_region_from(source, region);
            return Ok(());
        }

        let padded = region
            .expanded(self.half_width())
            .clamp_to(source.width(), source.height())
            .unwrap_or(*region);

        let mut roi = source.crop(&padded);
        let (rw, rh, channels) = (
            roi.width() as usize,
            roi.height() as usize,
            roi.channels() as usize,
        );
        let mut temp = self.blur_temp.borrow_mut();
        gaussian::separable_gaussian_blur_with_kernel(
            roi.data_mut(),
            rw,
            rh,
            channels,
            &self.kernel,
            &mut temp,
        );

        let inner = Region::new(
            region.x - padded.x,
            region.y - padded.y,
            region.width,
            region.height,
        );
        target.paste(&roi.crop(&inner), region.x as u32, region.y as u32);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(width: u32, height: u32, value: u8) -> Frame {
        Frame::filled(width, height, &[value, value, value])
    }

    fn checkerboard(width: u32, height: u32) -> Frame {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = if (x / 2 + y / 2) % 2 == 0 { 230 } else { 20 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        Frame::new(data, width, height, 3)
    }

    fn blur_full_frame(frame: &Frame, radius: f64) -> Frame {
        let mut out = frame.clone();
        let kernel = gaussian::gaussian_kernel_1d(radius);
        let (w, h) = (frame.width() as usize, frame.height() as usize);
        gaussian::separable_gaussian_blur_with_kernel(
            out.data_mut(),
            w,
            h,
            3,
            &kernel,
            &mut Vec::new(),
        );
        out
    }

    #[test]
    fn test_blur_spreads_bright_patch_within_region() {
        let source = {
            let mut f = make_frame(100, 100, 0);
            let data = f.data_mut();
            for y in 10..15 {
                for x in 10..15 {
                    let idx = (y * 100 + x) * 3;
                    data[idx..idx + 3].fill(255);
                }
            }
            f
        };
        let mut target = source.clone();

        GaussianBlurEffect::new(2.0)
            .apply(&source, &mut target, &Region::new(5, 5, 30, 30))
            .unwrap();

        let neighbor = (9 * 100 + 12) * 3; // one row above the bright patch
        assert!(target.data()[neighbor] > 0, "blur should spread to adjacent pixels");
    }

    #[test]
    fn test_pixels_outside_region_unchanged() {
        let source = checkerboard(60, 40);
        let mut target = source.clone();
        let region = Region::new(10, 10, 20, 15);

        GaussianBlurEffect::new(4.0)
            .apply(&source, &mut target, &region)
            .unwrap();

        for y in 0..40 {
            for x in 0..60 {
                if !region.contains(x, y) {
                    assert_eq!(target.pixel(x as u32, y as u32), source.pixel(x as u32, y as u32));
                }
            }
        }
    }

    #[test]
    fn test_matches_full_frame_blur_inside_region() {
        let source = checkerboard(64, 48);
        let region = Region::new(20, 12, 18, 20);
        let mut target = source.clone();
        GaussianBlurEffect::new(3.0)
            .apply(&source, &mut target, &region)
            .unwrap();

        let reference = blur_full_frame(&source, 3.0);
        assert_eq!(target.crop(&region), reference.crop(&region));
    }

    #[test]
    fn test_matches_full_frame_blur_at_image_edge() {
        let source = checkerboard(40, 30);
        let region = Region::new(0, 20, 15, 10);
        let mut target = source.clone();
        GaussianBlurEffect::new(2.5)
            .apply(&source, &mut target, &region)
            .unwrap();

        let reference = blur_full_frame(&source, 2.5);
        assert_eq!(target.crop(&region), reference.crop(&region));
    }

    #[test]
    fn test_zero_radius_copies_source() {
        let source = checkerboard(20, 20);
        let mut target = make_frame(20, 20, 7);
        let region = Region::new(2, 2, 5, 5);
        GaussianBlurEffect::new(0.0)
            .apply(&source, &mut target, &region)
            .unwrap();
        assert_eq!(target.crop(&region), source.crop(&region));
        assert_eq!(target.pixel(10, 10), &[7, 7, 7]);
    }

    #[test]
    fn test_samples_source_not_target() {
        // Target already holds other content; the effect must read the source.
        let source = make_frame(30, 30, 90);
        let mut target = make_frame(30, 30, 0);
        let region = Region::new(5, 5, 10, 10);
        GaussianBlurEffect::new(2.0)
            .apply(&source, &mut target, &region)
            .unwrap();
        assert!(target.crop(&region).data().iter().all(|&v| (v as i32 - 90).abs() <= 1));
    }

    #[test]
    fn test_rgba_alpha_channel_blurred_like_color() {
        let source = Frame::filled(20, 20, &[10, 20, 30, 255]);
        let mut target = source.clone();
        GaussianBlurEffect::new(1.5)
            .apply(&source, &mut target, &Region::new(0, 0, 20, 20))
            .unwrap();
        assert!(target.data().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_out_of_bounds_region_rejected() {
        let source = make_frame(20, 20, 0);
        let mut target = source.clone();
        let result = GaussianBlurEffect::new(2.0).apply(&source, &mut target, &Region::new(15, 15, 10, 10));
        assert!(matches!(result, Err(EffectError::OutOfBounds { .. })));
        assert_eq!(target, source);
    }
}
