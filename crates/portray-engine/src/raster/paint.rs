//! Conversion from the scene paint model to `tiny-skia` shaders.

use resvg::tiny_skia as sk;

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, Paint, RadialGradient};

pub(super) fn sk_color(c: Color) -> sk::Color {
    let (r, g, b, a) = c.to_straight();
    sk::Color::from_rgba(r, g, b, a).unwrap_or(sk::Color::TRANSPARENT)
}

#[inline]
fn sk_point(v: Vec2) -> sk::Point {
    sk::Point::from_xy(v.x, v.y)
}

/// Builds a shader for `paint`.
///
/// Returns `None` when the paint would draw nothing on a canvas (degenerate
/// gradient axis, zero-radius radial, no stops).
pub(super) fn shader(paint: &Paint) -> Option<sk::Shader<'static>> {
    match paint {
        Paint::Solid(c) => Some(sk::Shader::SolidColor(sk_color(*c))),
        Paint::LinearGradient(g) => linear(g),
        Paint::RadialGradient(g) => radial(g),
    }
}

fn linear(g: &LinearGradient) -> Option<sk::Shader<'static>> {
    if !g.is_valid() {
        return None;
    }
    if let [only] = g.stops.as_slice() {
        return Some(sk::Shader::SolidColor(sk_color(only.color)));
    }
    if g.start == g.end {
        return None;
    }

    sk::LinearGradient::new(
        sk_point(g.start),
        sk_point(g.end),
        sk_stops(g.stops.iter().map(|s| (s.t, s.color))),
        sk::SpreadMode::Pad,
        sk::Transform::identity(),
    )
}

/// Radial gradients are rendered as concentric around the end center.
///
/// Canvas offsets are mapped to the fraction of the outer radius at which they
/// land, so an outer-to-inner gradient keeps its stop 0 on the rim.
fn radial(g: &RadialGradient) -> Option<sk::Shader<'static>> {
    if !g.is_valid() {
        return None;
    }
    let outer = g.start_radius.max(g.end_radius);
    if outer <= 0.0 {
        return None;
    }
    if let [only] = g.stops.as_slice() {
        return Some(sk::Shader::SolidColor(sk_color(only.color)));
    }

    let mapped = g.stops.iter().map(|s| (g.radius_at(s.t.clamp(0.0, 1.0)) / outer, s.color));
    sk::RadialGradient::new(
        sk_point(g.end_center),
        sk_point(g.end_center),
        outer,
        sk_stops(mapped),
        sk::SpreadMode::Pad,
        sk::Transform::identity(),
    )
}

fn sk_stops(stops: impl Iterator<Item = (f32, Color)>) -> Vec<sk::GradientStop> {
    let mut out: Vec<(f32, Color)> = stops.map(|(t, c)| (t.clamp(0.0, 1.0), c)).collect();
    out.sort_by(|a, b| a.0.total_cmp(&b.0));
    out.into_iter()
        .map(|(t, c)| sk::GradientStop::new(t, sk_color(c)))
        .collect()
}

