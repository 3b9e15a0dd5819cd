use crate::effects::domain::region_effect::{check_inputs, EffectError, RegionEffect};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::blend::blend_pixel;

/// Horizontal motion smear confined to a region.
///
/// Pass `i` (1-based) composites a snapshot of the scratch buffer onto itself
/// shifted `i` pixels to the right at opacity `1 / (i + 1)`. Pixels never
/// leave the region: whatever is shifted past its right edge is dropped.
pub struct MotionSmearEffect {
    steps: usize,
}

impl MotionSmearEffect {
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl RegionEffect for MotionSmearEffect {
    fn apply(
        &self,
        source: &Frame,
        target: &mut Frame,
        region: &Region,
    ) -> Result<(), EffectError> {
        check_inputs(source, target, region)?;

        let mut scratch = source.crop(region);
        let w = scratch.width() as usize;
        let h = scratch.height() as usize;
        let channels = scratch.channels() as usize;
        let stride = w * channels;

        for shift in 1..=self.steps.min(w.saturating_sub(1)) {
            let opacity = 1.0 / (shift as f32 + 1.0);
            let snapshot = scratch.data().to_vec();
            let data = scratch.data_mut();
            for row in 0..h {
                let base = row * stride;
                for x in shift..w {
                    let dst = base + x * channels;
                    let src = base + (x - shift) * channels;
                    blend_pixel(
                        &mut data[dst..dst + channels],
                        &snapshot[src..src + channels],
                        opacity,
                    );
                }
            }
        }

        target.paste(&scratch, region.x as u32, region.y as u32);
        Ok(())
    }
}
