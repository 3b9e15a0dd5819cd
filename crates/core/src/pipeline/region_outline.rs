use crate::effects::infrastructure::blend::blend_pixel;
use crate::shared::constants::{OUTLINE_COLOR, OUTLINE_OPACITY, OUTLINE_WIDTH};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Diagnostic border marking where an effect was applied.
///
/// The border is drawn on the inside of the region so it never touches
/// pixels outside the region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionOutline {
    pub color: [u8; 3],
    pub opacity: f32,
    pub width: u32,
}

impl Default for RegionOutline {
    fn default() -> Self {
        Self {
            color: OUTLINE_COLOR,
            opacity: OUTLINE_OPACITY,
            width: OUTLINE_WIDTH,
        }
    }
}

impl RegionOutline {
    /// Draws the border for `region`, which must already be clamped to `frame`.
    pub fn draw(&self, frame: &mut Frame, region: &Region) {
        if self.width == 0 || region.is_empty() || !frame.contains_region(region) {
            return;
        }
        let channels = frame.channels() as usize;
        let stride = frame.width() as usize * channels;
        let paint: Vec<u8> = match channels {
            4 => vec![self.color[0], self.color[1], self.color[2], 255],
            _ => self.color.to_vec(),
        };

        let (x0, y0) = (region.x as u32, region.y as u32);
        let (w, h) = (region.width as u32, region.height as u32);
        let bw = self.width;
        let data = frame.data_mut();

        for row in 0..h {
            let on_horizontal_edge = row < bw || row >= h.saturating_sub(bw);
            for col in 0..w {
                let on_vertical_edge = col < bw || col >= w.saturating_sub(bw);
                if !(on_horizontal_edge || on_vertical_edge) {
                    continue;
                }
                let offset = (y0 + row) as usize * stride + (x0 + col) as usize * channels;
                blend_pixel(&mut data[offset..offset + channels], &paint, self.opacity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> RegionOutline {
        RegionOutline::default()
    }

    #[test]
    fn test_default_is_translucent_blue_three_wide() {
        let o = outline();
        assert_eq!(o.color, [0, 150, 255]);
        assert_eq!(o.width, 3);
        assert!((o.opacity - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_border_painted_interior_untouched() {
        let mut frame = Frame::filled(40, 40, &[0, 0, 0]);
        let region = Region::new(10, 10, 20, 20);
        outline().draw(&mut frame, &region);

        assert_eq!(frame.pixel(10, 10), &[0, 120, 204]);
        assert_eq!(frame.pixel(12, 20), &[0, 120, 204]);
        assert_eq!(frame.pixel(29, 29), &[0, 120, 204]);
        assert_eq!(frame.pixel(27, 15), &[0, 120, 204]);
        assert_eq!(frame.pixel(13, 13), &[0, 0, 0]);
        assert_eq!(frame.pixel(20, 20), &[0, 0, 0]);
    }

    #[test]
    fn test_pixels_outside_region_untouched() {
        let mut frame = Frame::filled(40, 40, &[9, 9, 9, 255]);
        let region = Region::new(10, 10, 20, 20);
        outline().draw(&mut frame, &region);

        for y in 0..40 {
            for x in 0..40 {
                if !region.contains(x, y) {
                    assert_eq!(frame.pixel(x as u32, y as u32), &[9, 9, 9, 255]);
                }
            }
        }
    }

    #[test]
    fn test_corner_pixels_blended_once() {
        let mut frame = Frame::filled(10, 10, &[0, 0, 0]);
        outline().draw(&mut frame, &Region::new(0, 0, 10, 10));
        assert_eq!(frame.pixel(0, 0), frame.pixel(5, 0));
    }

    #[test]
    fn test_region_thinner_than_border_fully_painted() {
        let mut frame = Frame::filled(10, 10, &[0, 0, 0]);
        outline().draw(&mut frame, &Region::new(2, 2, 4, 4));
        let region = Region::new(2, 2, 4, 4);
        assert!(frame
            .crop(&region)
            .data()
            .chunks_exact(3)
            .all(|px| px == [0, 120, 204]));
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        let mut frame = Frame::filled(10, 10, &[0, 0, 0]);
        let original = frame.clone();
        RegionOutline {
            width: 0,
            ..outline()
        }
        .draw(&mut frame, &Region::new(0, 0, 10, 10));
        assert_eq!(frame, original);
    }

    #[test]
    fn test_region_outside_frame_ignored() {
        let mut frame = Frame::filled(10, 10, &[0, 0, 0]);
        let original = frame.clone();
        outline().draw(&mut frame, &Region::new(5, 5, 10, 10));
        assert_eq!(frame, original);
    }
}
