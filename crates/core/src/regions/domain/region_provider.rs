use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for finding the regions to obscure for a subject.
///
/// The demo answers from a fixed table; a real detector can implement the
/// same trait using the frame contents, hence `&mut self` and the frame.
pub trait RegionProvider: Send {
    fn regions(
        &mut self,
        subject: &str,
        frame: &Frame,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;

    /// Subjects this provider knows about, in display order.
    fn subjects(&self) -> Vec<String>;
}
