use std::path::Path;

use image::DynamicImage;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Decodes an image file with the `image` crate.
///
/// Every format is normalised to RGBA so the renderer works on the same
/// layout a browser canvas would.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, location: &str) -> Result<Frame, Box<dyn std::error::Error>> {
        let path = Path::new(location);
        let img = image::open(path)
            .map_err(|e| format!("Failed to load image {}: {e}", path.display()))?;
        let frame = frame_from_image(img);
        log::debug!(
            "Decoded {} ({}x{})",
            path.display(),
            frame.width(),
            frame.height()
        );
        Ok(frame)
    }
}

pub(crate) fn frame_from_image(img: DynamicImage) -> Frame {
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Frame::new(rgba.into_raw(), width, height, 4)
}
