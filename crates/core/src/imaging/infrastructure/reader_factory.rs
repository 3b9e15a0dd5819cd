use crate::imaging::domain::image_reader::ImageReader;

use super::http_image_reader::HttpImageReader;
use super::image_file_reader::ImageFileReader;

/// Picks the reader for a location: HTTP(S) URLs are fetched, anything else
/// is treated as a file path.
pub fn create_reader(location: &str) -> Box<dyn ImageReader> {
    if HttpImageReader::handles(location) {
        log::debug!("Using HTTP reader for {location}");
        Box::new(HttpImageReader::new())
    } else {
        Box::new(ImageFileReader::new())
    }
}
