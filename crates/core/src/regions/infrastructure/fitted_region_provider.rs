use crate::regions::domain::region_provider::RegionProvider;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Decorator that rescales an inner provider's regions from the image size
/// they were authored against to the size of the frame being rendered.
pub struct FittedRegionProvider {
    inner: Box<dyn RegionProvider>,
    reference_size: (u32, u32),
}

impl FittedRegionProvider {
    pub fn new(
        inner: Box<dyn RegionProvider>,
        reference_size: (u32, u32),
    ) -> Result<Self, &'static str> {
        if reference_size.0 == 0 || reference_size.1 == 0 {
            return Err("reference size must be non-zero");
        }
        Ok(Self {
            inner,
            reference_size,
        })
    }
}

impl RegionProvider for FittedRegionProvider {
    fn regions(
        &mut self,
        subject: &str,
        frame: &Frame,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let regions = self.inner.regions(subject, frame)?;
        let (ref_w, ref_h) = self.reference_size;
        if (frame.width(), frame.height()) == (ref_w, ref_h) {
            return Ok(regions);
        }

        let sx = frame.width() as f64 / ref_w as f64;
        let sy = frame.height() as f64 / ref_h as f64;
        log::debug!(
            "Fitting {} regions from {ref_w}x{ref_h} to {}x{}",
            regions.len(),
            frame.width(),
            frame.height()
        );
        Ok(regions.iter().map(|r| r.scaled(sx, sy)).collect())
    }

    fn subjects(&self) -> Vec<String> {
        self.inner.subjects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::infrastructure::fixed_region_provider::FixedRegionProvider;

    fn fitted() -> FittedRegionProvider {
        FittedRegionProvider::new(Box::new(FixedRegionProvider::demo()), (800, 500)).unwrap()
    }

    #[test]
    fn test_reference_size_passes_through() {
        let frame = Frame::filled(800, 500, &[0, 0, 0]);
        let regions = fitted().regions("face", &frame).unwrap();
        assert_eq!(regions[0], Region::new(545, 90, 50, 60));
    }

    #[test]
    fn test_half_size_frame_halves_regions() {
        let frame = Frame::filled(400, 250, &[0, 0, 0]);
        let regions = fitted().regions("laptop", &frame).unwrap();
        assert_eq!(regions[0], Region::new(280, 85, 50, 30));
    }

    #[test]
    fn test_non_uniform_scale() {
        let frame = Frame::filled(1600, 500, &[0, 0, 0]);
        let regions = fitted().regions("face", &frame).unwrap();
        assert_eq!(regions[1], Region::new(890, 100, 100, 60));
    }

    #[test]
    fn test_subjects_delegate_to_inner() {
        assert_eq!(fitted().subjects(), vec!["face", "laptop"]);
    }

    #[test]
    fn test_zero_reference_size_rejected() {
        let result = FittedRegionProvider::new(Box::new(FixedRegionProvider::demo()), (0, 500));
        assert!(result.is_err());
    }
}
