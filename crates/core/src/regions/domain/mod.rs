pub mod region_provider;
