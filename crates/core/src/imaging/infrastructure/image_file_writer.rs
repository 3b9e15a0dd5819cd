use std::path::Path;

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes a single frame to an image file using the `image` crate.
///
/// The format follows the file extension. Formats without an alpha channel
/// (JPEG) receive the RGB channels only.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let img = match frame.channels() {
            4 => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                    .ok_or("Failed to create image from frame data")?,
            ),
            _ => DynamicImage::ImageRgb8(
                RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                    .ok_or("Failed to create image from frame data")?,
            ),
        };

        if is_jpeg(path) {
            img.into_rgb8().save(path)?;
        } else {
            img.save(path)?;
        }
        Ok(())
    }
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false)
}
