use crate::effects::domain::region_effect::RegionEffect;
use crate::pipeline::region_outline::RegionOutline;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Per-pass counters, mostly for logging and the UI status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Regions the effect was applied to.
    pub rendered: usize,
    /// Regions that reached past the image and were clamped.
    pub clamped: usize,
    /// Regions entirely outside the image.
    pub skipped: usize,
    /// Regions whose effect failed; their original pixels were kept.
    pub failed: usize,
}

pub struct RenderOutput {
    pub frame: Frame,
    pub report: RenderReport,
}

/// One full render pass: base image in, obscured image out.
///
/// Every pass starts from a fresh copy of the base image, and every effect
/// samples the untouched base, so the result depends only on the inputs.
/// Pixels outside all regions are never written.
pub struct RegionRenderer {
    effect: Box<dyn RegionEffect>,
    outline: Option<RegionOutline>,
}

impl RegionRenderer {
    pub fn new(effect: Box<dyn RegionEffect>, outline: Option<RegionOutline>) -> Self {
        Self { effect, outline }
    }

    pub fn render(&self, base: &Frame, regions: &[Region]) -> RenderOutput {
        let mut frame = base.clone();
        let mut report = RenderReport::default();

        let visible = clamp_regions(regions, base.width(), base.height(), &mut report);
        if has_overlap(&visible) {
            log::debug!("Overlapping regions: later regions overwrite earlier ones");
        }

        for region in &visible {
            match self.effect.apply(base, &mut frame, region) {
                Ok(()) => report.rendered += 1,
                Err(e) => {
                    log::warn!("Effect failed for region {region:?}, keeping original pixels: {e}");
                    frame.copy_region_from(base, region);
                    report.failed += 1;
                }
            }
        }

        if let Some(outline) = &self.outline {
            for region in &visible {
                outline.draw(&mut frame, region);
            }
        }

        log::debug!(
            "Rendered {} regions ({} clamped, {} skipped, {} failed)",
            report.rendered,
            report.clamped,
            report.skipped,
            report.failed
        );
        RenderOutput { frame, report }
    }
}

fn clamp_regions(
    regions: &[Region],
    width: u32,
    height: u32,
    report: &mut RenderReport,
) -> Vec<Region> {
    let mut visible = Vec::with_capacity(regions.len());
    for region in regions {
        match region.clamp_to(width, height) {
            Some(clamped) => {
                if clamped != *region {
                    log::debug!("Clamped region {region:?} to {clamped:?}");
                    report.clamped += 1;
                }
                visible.push(clamped);
            }
            None => {
                log::warn!("Region {region:?} lies outside the {width}x{height} image, skipping");
                report.skipped += 1;
            }
        }
    }
    visible
}

fn has_overlap(regions: &[Region]) -> bool {
    regions
        .iter()
        .enumerate()
        .any(|(i, a)| regions[i + 1..].iter().any(|b| a.intersects(b)))
}
