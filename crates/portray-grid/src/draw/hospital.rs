use portray_engine::coords::{Rect, Vec2};
use portray_engine::paint::Color;
use portray_engine::scene::FontWeight;

use super::Painter;
use crate::error::RenderIssue;

/// Offsets of the three sub-boxes, in sub-box widths from the left edge.
const SLOTS: [f32; 3] = [0.25, 1.5, 2.75];
const ID_FONT_SIZE: f32 = 12.0;
/// CSS `LightSlateGray`.
const BACKDROP: u32 = 0x778899;

/// Gray box with three colored status boxes and an optional identifier
/// label above it.
pub(crate) fn draw(p: &mut Painter<'_>, x: i64, y: i64, w: f32, h: f32, colors: &[Color], id: Option<&str>) {
    let g = p.geometry;
    let outer = g.centered_box(x, y, w, h);
    let (dx, dy) = (outer.size.x, outer.size.y);
    let box_width = dx / 4.0;

    p.list.fill_rect(p.z, outer, Color::from_rgb_hex(BACKDROP));

    if colors.len() < SLOTS.len() {
        p.report.push(RenderIssue::InvalidColor {
            site: p.site,
            reason: format!("hospital needs {} colors, got {}", SLOTS.len(), colors.len()),
        });
    }

    for (offset, color) in SLOTS.iter().zip(colors) {
        let sub = Rect::new(
            outer.origin.x + offset * box_width,
            outer.origin.y + 0.2 * dy,
            box_width,
            0.6 * dy,
        );
        p.list.fill_rect(p.z, sub, *color);
    }

    if let Some(id) = id {
        let c = g.cell_center(x, y);
        p.list.fill_text(p.z, id, FontWeight::Bold, ID_FONT_SIZE, Color::black(), Vec2::new(c.x, c.y - 1.5 * dy));
    }
}
