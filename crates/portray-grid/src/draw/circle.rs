use portray_engine::paint::RadialGradient;
use portray_engine::scene::Stroke;

use super::{Label, Painter, Style};

/// Circle of `r` inscribed radii. The fill gradient runs from the rim
/// inwards: the first color sits on the outer edge.
pub(crate) fn draw(p: &mut Painter<'_>, x: i64, y: i64, r: f32, style: &Style, label: Option<&Label>) {
    let g = p.geometry;
    let center = g.cell_center(x, y);
    let radius = r * g.max_inscribed_radius();

    p.list.stroke_circle(p.z, center, radius, Stroke::hairline(style.stroke));

    if style.filled {
        if let Some(stops) = style.stops() {
            let gradient = RadialGradient::concentric(center, radius, 0.0, stops);
            p.list.fill_circle(p.z, center, radius, gradient);
        }
    }

    p.label(label, center);
}
