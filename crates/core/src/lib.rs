pub mod effects;
pub mod imaging;
pub mod pipeline;
pub mod regions;
pub mod shared;
