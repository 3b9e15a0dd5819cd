pub mod effect_config;
pub mod region_effect;
