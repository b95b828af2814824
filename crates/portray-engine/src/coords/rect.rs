use super::Vec2;

/// Axis-aligned rectangle in surface pixels; `origin` is the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    /// Rectangle of `size` whose center sits on `center`. Cell-centered
    /// shapes and sprites are placed this way.
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self { origin: center - Vec2::new(size.x / 2.0, size.y / 2.0), size }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same area with non-negative width and height.
    pub fn normalized(self) -> Self {
        fn span(start: f32, len: f32) -> (f32, f32) {
            if len < 0.0 { (start + len, -len) } else { (start, len) }
        }
        let (x, w) = span(self.origin.x, self.size.x);
        let (y, h) = span(self.origin.y, self.size.y);
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_at_places_center() {
        let rect = Rect::centered_at(Vec2::new(25.0, 475.0), Vec2::new(25.0, 25.0));
        assert_eq!(rect, Rect::new(12.5, 462.5, 25.0, 25.0));
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = Rect::new(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, Rect::new(6.0, 7.0, 4.0, 3.0));
        assert!(!n.is_empty());
    }

    #[test]
    fn zero_width_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
    }
}
