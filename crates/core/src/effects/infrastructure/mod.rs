pub mod blend;
pub mod effect_factory;
mod gaussian;
pub mod gaussian_blur_effect;
pub mod motion_smear_effect;
pub mod pixelate_effect;
mod sampling;
