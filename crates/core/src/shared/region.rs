use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in image pixel coordinates.
///
/// Coordinates are signed so hand-authored tables may reach past the image;
/// [`Region::clamp_to`] produces the visible part before any pixel work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "w", alias = "width")]
    pub width: i32,
    #[serde(rename = "h", alias = "height")]
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && (px as i64) < self.right() && (py as i64) < self.bottom()
    }

    /// Intersection with `[0, width) x [0, height)`, or `None` if nothing is visible.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Region> {
        let x1 = (self.x as i64).max(0);
        let y1 = (self.y as i64).max(0);
        let x2 = self.right().min(width as i64);
        let y2 = self.bottom().min(height as i64);
        if self.is_empty() || x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Region::new(
            x1 as i32,
            y1 as i32,
            (x2 - x1) as i32,
            (y2 - y1) as i32,
        ))
    }

    pub fn intersects(&self, other: &Region) -> bool {
        self.intersection_area(other) > 0
    }

    /// Grows the rectangle by `margin` on every side (no clamping).
    pub fn expanded(&self, margin: i32) -> Region {
        Region::new(
            self.x.saturating_sub(margin),
            self.y.saturating_sub(margin),
            self.width.saturating_add(margin.saturating_mul(2)),
            self.height.saturating_add(margin.saturating_mul(2)),
        )
    }

    /// Rescales coordinates, rounding edges to the nearest pixel.
    ///
    /// Scaled edges are limited to half the `i32` range, so the size always
    /// fits in `i32` and far-away regions are left to [`Region::clamp_to`].
    pub fn scaled(&self, sx: f64, sy: f64) -> Region {
        let x1 = scale_edge(self.x as i64, sx);
        let y1 = scale_edge(self.y as i64, sy);
        let x2 = scale_edge(self.right(), sx);
        let y2 = scale_edge(self.bottom(), sy);
        Region::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// `(x, y, w, h)` as indices. Only meaningful for clamped regions.
    pub(crate) fn as_usize(&self) -> (usize, usize, usize, usize) {
        (
            self.x.max(0) as usize,
            self.y.max(0) as usize,
            self.width.max(0) as usize,
            self.height.max(0) as usize,
        )
    }

    fn intersection_area(&self, other: &Region) -> i64 {
        if self.is_empty() || other.is_empty() {
            return 0;
        }
        let ix1 = (self.x as i64).max(other.x as i64);
        let iy1 = (self.y as i64).max(other.y as i64);
        let ix2 = self.right().min(other.right());
        let iy2 = self.bottom().min(other.bottom());
        (ix2 - ix1).max(0) * (iy2 - iy1).max(0)
    }
}

const MAX_SCALED_EDGE: i64 = (i32::MAX / 2) as i64;

fn scale_edge(edge: i64, factor: f64) -> i32 {
    // float-to-int `as` saturates and maps NaN to 0
    let scaled = (edge as f64 * factor).round() as i64;
    scaled.clamp(-MAX_SCALED_EDGE, MAX_SCALED_EDGE) as i32
}
