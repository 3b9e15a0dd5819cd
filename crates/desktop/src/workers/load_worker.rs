use std::thread;

use crossbeam_channel::Receiver;

use obscura_core::imaging::infrastructure::reader_factory::create_reader;
use obscura_core::shared::frame::Frame;

/// Messages sent from the loader thread to the UI.
#[derive(Debug)]
pub enum LoadMessage {
    Loaded(Frame),
    Error(String),
}

/// Spawn a background image load for a file path or URL.
///
/// Fetching and decoding stay off the UI thread; the app polls the
/// returned receiver until a single message arrives.
pub fn spawn(location: String) -> Receiver<LoadMessage> {
    let (tx, rx) = crossbeam_channel::bounded::<LoadMessage>(1);

    thread::spawn(move || {
        let reader = create_reader(&location);
        let message = match reader.read(&location) {
            Ok(frame) => LoadMessage::Loaded(frame),
            Err(e) => {
                log::warn!("Failed to load {location}: {e}");
                LoadMessage::Error(e.to_string())
            }
        };
        let _ = tx.send(message);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_file_reports_error() {
        let rx = spawn("/nonexistent/photo.png".to_string());
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadMessage::Error(e) => assert!(e.contains("/nonexistent/photo.png")),
            LoadMessage::Loaded(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_loads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        image::RgbImage::from_pixel(6, 4, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        match rx_for(&path).recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadMessage::Loaded(frame) => {
                assert_eq!((frame.width(), frame.height()), (6, 4));
                assert_eq!(frame.pixel(0, 0), &[10, 20, 30, 255]);
            }
            LoadMessage::Error(e) => panic!("unexpected error: {e}"),
        }
    }

    fn rx_for(path: &std::path::Path) -> Receiver<LoadMessage> {
        spawn(path.to_string_lossy().to_string())
    }
}
