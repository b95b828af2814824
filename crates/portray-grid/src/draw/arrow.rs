use portray_engine::coords::Vec2;
use portray_engine::paint::LinearGradient;
use portray_engine::scene::Stroke;

use super::{Label, Painter, Style};
use crate::shape::Heading;

/// Notch depth as a fraction of the arrow radius.
const NOTCH: f32 = 0.8;

/// Tip, left wing, notch, right wing.
pub(crate) fn points(center: Vec2, radius: f32, heading: Heading) -> [Vec2; 4] {
    let (cx, cy, r) = (center.x, center.y, radius);
    let p = Vec2::new;
    match heading {
        Heading::Up => [p(cx, cy - r), p(cx - r, cy + r), p(cx, cy + NOTCH * r), p(cx + r, cy + r)],
        Heading::Right => [p(cx + r, cy), p(cx - r, cy - r), p(cx - NOTCH * r, cy), p(cx - r, cy + r)],
        Heading::Down => [p(cx, cy + r), p(cx - r, cy - r), p(cx, cy - NOTCH * r), p(cx + r, cy - r)],
        Heading::Left => [p(cx - r, cy), p(cx + r, cy - r), p(cx + NOTCH * r, cy), p(cx + r, cy + r)],
    }
}

pub(crate) fn draw(
    p: &mut Painter<'_>,
    x: i64,
    y: i64,
    heading: Heading,
    scale: f32,
    style: &Style,
    label: Option<&Label>,
) {
    let g = p.geometry;
    let center = g.cell_center(x, y);
    let pts = points(center, g.max_inscribed_radius() * scale, heading);

    p.list.stroke_polygon(p.z, pts.to_vec(), Stroke::hairline(style.stroke));

    if style.filled {
        if let Some(stops) = style.stops() {
            p.list.fill_polygon(p.z, pts.to_vec(), LinearGradient::new(pts[0], pts[2], stops));
        }
    }

    p.label(label, center);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_arrow_tip_is_above_center() {
        let [tip, left, notch, right] = points(Vec2::new(50.0, 50.0), 10.0, Heading::Up);
        assert_eq!(tip, Vec2::new(50.0, 40.0));
        assert_eq!(left, Vec2::new(40.0, 60.0));
        assert_eq!(notch, Vec2::new(50.0, 58.0));
        assert_eq!(right, Vec2::new(60.0, 60.0));
    }

    #[test]
    fn left_arrow_mirrors_right() {
        let c = Vec2::new(0.0, 0.0);
        let right = points(c, 5.0, Heading::Right);
        let left = points(c, 5.0, Heading::Left);
        for (a, b) in right.iter().zip(left.iter()) {
            assert_eq!(a.x, -b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
