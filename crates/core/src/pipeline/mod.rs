pub mod region_outline;
pub mod region_renderer;
pub mod render_session;
