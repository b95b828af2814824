use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is the offset along the gradient in [0, 1]. Outside the stop range the
/// edge colors are padded, as a 2D canvas does.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }

    /// One stop per color, the i-th placed at `i / colors.len()`.
    ///
    /// The last stop therefore sits below 1.0 and the final color pads to the end.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<ColorStop> {
        let count = colors.len() as f32;
        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(i as f32 / count, color))
            .collect()
    }
}

/// Linear gradient along the `start` → `end` axis, in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A single stop is usable and renders as a solid fill.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}

/// Radial gradient between two circles, canvas style.
///
/// Offset 0 lies on the start circle and offset 1 on the end circle. The start
/// radius may exceed the end radius, which runs the stops from the outside in.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start_center: Vec2,
    pub start_radius: f32,
    pub end_center: Vec2,
    pub end_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(
        start_center: Vec2,
        start_radius: f32,
        end_center: Vec2,
        end_radius: f32,
        stops: Vec<ColorStop>,
    ) -> Self {
        Self { start_center, start_radius, end_center, end_radius, stops }
    }

    /// Concentric gradient at `center` from `start_radius` to `end_radius`.
    pub fn concentric(center: Vec2, start_radius: f32, end_radius: f32, stops: Vec<ColorStop>) -> Self {
        Self::new(center, start_radius, center, end_radius, stops)
    }

    /// Radius (in pixels) at which the stop at offset `t` lands.
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        self.start_radius + t * (self.end_radius - self.start_radius)
    }

    pub fn is_valid(&self) -> bool {
        self.start_center.is_finite()
            && self.end_center.is_finite()
            && self.start_radius.is_finite()
            && self.end_radius.is_finite()
            && self.start_radius >= 0.0
            && self.end_radius >= 0.0
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_uses_i_over_count() {
        let stops = ColorStop::evenly_spaced(&[Color::black(), Color::white(), Color::black()]);
        let ts: Vec<f32> = stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 1.0 / 3.0, 2.0 / 3.0]);
    }

    #[test]
    fn evenly_spaced_single_color_is_one_stop() {
        let stops = ColorStop::evenly_spaced(&[Color::white()]);
        assert_eq!(stops, vec![ColorStop::new(0.0, Color::white())]);
    }

    #[test]
    fn inward_radial_radius_decreases_with_offset() {
        let g = RadialGradient::concentric(Vec2::new(5.0, 5.0), 24.0, 0.0, vec![]);
        assert_eq!(g.radius_at(0.0), 24.0);
        assert_eq!(g.radius_at(0.5), 12.0);
        assert_eq!(g.radius_at(1.0), 0.0);
    }
}
