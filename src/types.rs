/// Pixel grid size. Both sides are positive once attached to a [`GrayBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Owned single-channel 8-bit image, row-major, no padding between rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayBuffer {
    dims: Dimensions,
    pixels: Vec<u8>,
}

impl GrayBuffer {
    /// Wrap raw pixels. Returns `None` when a side is zero or the length
    /// does not match `width * height`.
    pub fn from_raw(dims: Dimensions, pixels: Vec<u8>) -> Option<Self> {
        if dims.is_empty() || pixels.len() != dims.pixel_count() {
            return None;
        }
        Some(Self { dims, pixels })
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.dims.width as usize)
    }
}
