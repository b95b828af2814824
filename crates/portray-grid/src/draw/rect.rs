use portray_engine::coords::Vec2;
use portray_engine::paint::LinearGradient;
use portray_engine::scene::Stroke;

use super::{Label, Painter, Style};

/// `w × h` cells centered in `(x, y)`. Stroked always; filled with a
/// gradient spanning one cell from the top-left corner. Unfilled
/// rectangles only record the fill style.
pub(crate) fn draw(p: &mut Painter<'_>, x: i64, y: i64, w: f32, h: f32, style: &Style, label: Option<&Label>) {
    let g = p.geometry;
    let rect = g.centered_box(x, y, w, h);

    p.list.stroke_rect(p.z, rect, Stroke::hairline(style.stroke));

    if style.filled {
        if let Some(stops) = style.stops() {
            let start = rect.origin;
            let end = start + Vec2::new(g.cell_width(), g.cell_height());
            p.list.fill_rect(p.z, rect, LinearGradient::new(start, end, stops));
        }
    } else {
        p.list.set_fill_style(p.z, style.colors.clone());
    }

    p.label(label, g.cell_center(x, y));
}
