/// Photo used by the marketing demo; the built-in region table is authored against it.
pub const DEMO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1573164713988-8665fc963095?w=800&h=500&fit=crop";

/// Size of the demo photo, i.e. the reference size of the built-in region table.
pub const DEMO_IMAGE_SIZE: (u32, u32) = (800, 500);

pub const MAX_INTENSITY: u8 = 100;
pub const DEFAULT_INTENSITY: u8 = 10;

/// Blur radius at full intensity, in pixels.
pub const MAX_BLUR_RADIUS: f64 = 20.0;

pub const DEFAULT_SUBJECT: &str = "face";

pub const OUTLINE_COLOR: [u8; 3] = [0, 150, 255];
pub const OUTLINE_OPACITY: f32 = 0.8;
pub const OUTLINE_WIDTH: u32 = 3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
