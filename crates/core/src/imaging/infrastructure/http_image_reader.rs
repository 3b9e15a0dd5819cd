use std::time::Duration;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

use super::image_file_reader::frame_from_image;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches an image over HTTP(S) and decodes it in memory.
pub struct HttpImageReader {
    timeout: Duration,
}

impl HttpImageReader {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether `location` looks like something this reader can fetch.
    pub fn handles(location: &str) -> bool {
        let lower = location.trim_start().to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl Default for HttpImageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for HttpImageReader {
    fn read(&self, location: &str) -> Result<Frame, Box<dyn std::error::Error>> {
        log::info!("Fetching image from {location}");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(location).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| format!("Failed to decode image from {location}: {e}"))?;
        let frame = frame_from_image(img);
        log::debug!(
            "Decoded {} bytes into {}x{}",
            bytes.len(),
            frame.width(),
            frame.height()
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/a.png", true)]
    #[case("HTTP://example.com/a.png", true)]
    #[case("/tmp/a.png", false)]
    #[case("ftp://example.com/a.png", false)]
    #[case("demo.png", false)]
    fn test_handles(#[case] location: &str, #[case] expected: bool) {
        assert_eq!(HttpImageReader::handles(location), expected);
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        let reader = HttpImageReader::new().with_timeout(Duration::from_secs(2));
        assert!(reader.read("http://127.0.0.1:1/missing.png").is_err());
    }

    #[test]
    fn test_malformed_url_is_an_error() {
        assert!(HttpImageReader::new().read("http://").is_err());
    }
}
