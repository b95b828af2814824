use portray_engine::bitmap::ImageId;
use portray_engine::coords::Rect;
use portray_engine::paint::Color;
use portray_engine::scene::Stroke;

use super::Painter;
use crate::error::RenderIssue;
use crate::shape::SpriteKind;

/// Outline color for images that are not loaded.
pub(crate) fn placeholder_color() -> Color {
    Color::from_srgb_u8(0x80, 0x80, 0x80, 0xff)
}

/// Draws `kind` scaled to `scale` cells around the cell center. Labels are
/// not drawn on sprites.
pub(crate) fn draw(p: &mut Painter<'_>, x: i64, y: i64, kind: SpriteKind, scale: f32) {
    let dest = p.geometry.centered_box(x, y, scale, scale);
    match p.assets.sprite(kind) {
        Some(id) => image_or_placeholder(p, id, dest),
        None => {
            p.report.push_once(RenderIssue::AssetNotReady { asset: kind.tag().to_string() });
            p.list.stroke_rect(p.z, dest, Stroke::hairline(placeholder_color()));
        }
    }
}

/// Draws `id` into `dest` when ready, otherwise a gray outline of `dest`.
pub(crate) fn image_or_placeholder(p: &mut Painter<'_>, id: ImageId, dest: Rect) {
    if p.images.ready(id).is_some() {
        p.list.draw_image(p.z, id, dest);
        return;
    }

    let asset = p.images.label(id).unwrap_or("<unknown>").to_string();
    p.report.push_once(RenderIssue::AssetNotReady { asset });
    p.list.stroke_rect(p.z, dest, Stroke::hairline(placeholder_color()));
}
