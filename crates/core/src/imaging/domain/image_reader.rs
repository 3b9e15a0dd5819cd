use crate::shared::frame::Frame;

/// Loads and decodes a base image.
///
/// `location` is interpreted by the implementation (file path, URL).
pub trait ImageReader: Send {
    fn read(&self, location: &str) -> Result<Frame, Box<dyn std::error::Error>>;
}
