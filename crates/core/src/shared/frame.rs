use ndarray::{s, ArrayView3, ArrayViewMut3};

use crate::shared::region::Region;

/// An image raster: contiguous 8-bit RGB or RGBA bytes in row-major order.
///
/// Decoding and encoding happen at I/O boundaries only; effects and the
/// renderer see nothing but this buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        debug_assert!(
            channels == 3 || channels == 4,
            "frames are RGB or RGBA"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// A frame filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * pixel.len())
            .collect();
        Self::new(data, width, height, pixel.len() as u8)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * c;
        &self.data[offset..offset + c]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Whether `region` lies entirely inside this frame.
    pub fn contains_region(&self, region: &Region) -> bool {
        region.x >= 0
            && region.y >= 0
            && region.width >= 0
            && region.height >= 0
            && region.x as i64 + region.width as i64 <= self.width as i64
            && region.y as i64 + region.height as i64 <= self.height as i64
    }

    /// Copies a sub-rectangle into a new frame. `region` must lie inside.
    pub fn crop(&self, region: &Region) -> Frame {
        debug_assert!(self.contains_region(region), "crop outside frame");
        let (x, y, w, h) = region.as_usize();
        let view = self.as_ndarray();
        let roi = view.slice(s![y..y + h, x..x + w, ..]);
        Frame::new(
            roi.iter().copied().collect(),
            w as u32,
            h as u32,
            self.channels,
        )
    }

    /// Writes `patch` with its top-left corner at `(x, y)`.
    ///
    /// The patch must have the same channel count and fit inside this frame.
    pub fn paste(&mut self, patch: &Frame, x: u32, y: u32) {
        debug_assert_eq!(patch.channels, self.channels, "channel mismatch");
        let (x, y) = (x as usize, y as usize);
        let (w, h) = (patch.width as usize, patch.height as usize);
        let mut view = self.as_ndarray_mut();
        view.slice_mut(s![y..y + h, x..x + w, ..])
            .assign(&patch.as_ndarray());
    }

    /// Restores `region` from `other`, which must have identical geometry.
    pub fn copy_region_from(&mut self, other: &Frame, region: &Region) {
        debug_assert_eq!(self.shape(), other.shape(), "frame geometry mismatch");
        let (x, y, w, h) = region.as_usize();
        let src = other.as_ndarray();
        let mut dst = self.as_ndarray_mut();
        dst.slice_mut(s![y..y + h, x..x + w, ..])
            .assign(&src.slice(s![y..y + h, x..x + w, ..]));
    }

    /// RGBA bytes for display surfaces; RGB frames get an opaque alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        if self.has_alpha() {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for px in self.data.chunks_exact(3) {
            out.extend_from_slice(px);
            out.push(255);
        }
        out
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
