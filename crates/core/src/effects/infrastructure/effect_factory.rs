use crate::effects::domain::effect_config::{EffectConfig, EffectKind};
use crate::effects::domain::region_effect::RegionEffect;

use super::gaussian_blur_effect::GaussianBlurEffect;
use super::motion_smear_effect::MotionSmearEffect;
use super::pixelate_effect::PixelateEffect;

/// Creates the effect for a configuration, mapping intensity to the
/// effect's own parameter. Logs the chosen parameter.
pub fn create_effect(config: &EffectConfig) -> Box<dyn RegionEffect> {
    let intensity = config.intensity;
    match config.kind {
        EffectKind::Blur => {
            let radius = intensity.blur_radius();
            log::info!("Using Gaussian blur (intensity={intensity}, radius={radius:.2}px)");
            Box::new(GaussianBlurEffect::new(radius))
        }
        EffectKind::Pixelate => {
            let factor = intensity.pixelate_factor();
            log::info!("Using pixelate (intensity={intensity}, block={factor:.1}px)");
            Box::new(PixelateEffect::new(factor))
        }
        EffectKind::Motion => {
            let steps = intensity.motion_steps();
            log::info!("Using motion smear (intensity={intensity}, steps={steps})");
            Box::new(MotionSmearEffect::new(steps))
        }
    }
}
