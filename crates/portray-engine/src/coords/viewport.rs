/// Drawing surface size in pixels.
///
/// The grid renderer derives its cell size from this; the rasterizer allocates
/// its pixmap from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Pixel dimensions, rounded up. `None` for an invalid viewport.
    pub fn pixel_size(self) -> Option<(u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        Some((self.width.ceil() as u32, self.height.ceil() as u32))
    }
}
