use crate::effects::domain::region_effect::{check_inputs, EffectError, RegionEffect};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::sampling;

/// Smallest block size that still changes the image.
const MIN_FACTOR: f64 = 1.0;

/// Blocky mosaic confined to a region.
///
/// The region is downscaled by `factor` with nearest-neighbour sampling and
/// scaled back up the same way, so it keeps its exact dimensions.
pub struct PixelateEffect {
    factor: f64,
}

impl PixelateEffect {
    /// `factor` is the block size in source pixels; values below 1 are raised to 1.
    pub fn new(factor: f64) -> Self {
        let factor = if factor.is_finite() {
            factor.max(MIN_FACTOR)
        } else {
            MIN_FACTOR
        };
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl RegionEffect for PixelateEffect {
    fn apply(
        &self,
        source: &Frame,
        target: &mut Frame,
        region: &Region,
    ) -> Result<(), EffectError> {
        check_inputs(source, target, region)?;

        let crop = source.crop(region);
        let (w, h, channels) = (
            crop.width() as usize,
            crop.height() as usize,
            crop.channels() as usize,
        );
        let (small, sw, sh) = sampling::downscale_nearest(crop.data(), w, h, channels, self.factor);
        let blocky = sampling::upscale_nearest(&small, sw, sh, channels, self.factor, w, h);

        let patch = Frame::new(blocky, crop.width(), crop.height(), crop.channels());
        target.paste(&patch, region.x as u32, region.y as u32);
        Ok(())
    }
}
