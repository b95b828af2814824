//! Paint model shared between the grid renderer and the rasterizer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha) and CSS color parsing
//! - paint sources (solid, linear and radial gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod css;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient};

/// Paint source for filling geometry.
///
/// Mirrors the fill styles a 2D canvas accepts. Renderers dispatch on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Stops of the gradient, or `None` for a solid paint.
    pub fn stops(&self) -> Option<&[ColorStop]> {
        match self {
            Paint::Solid(_) => None,
            Paint::LinearGradient(g) => Some(&g.stops),
            Paint::RadialGradient(g) => Some(&g.stops),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self.stops() {
            None => matches!(self, Paint::Solid(c) if c.a >= 1.0),
            // Conservative: a gradient is opaque only when every stop is.
            Some(stops) => !stops.is_empty() && stops.iter().all(|s| s.color.a >= 1.0),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}

impl From<RadialGradient> for Paint {
    #[inline]
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
