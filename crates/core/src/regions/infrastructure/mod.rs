pub mod fitted_region_provider;
pub mod fixed_region_provider;
