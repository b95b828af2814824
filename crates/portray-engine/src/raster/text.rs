use fontdue::layout::{
    CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle, VerticalAlign,
};
use resvg::tiny_skia as sk;

use crate::scene::TextCmd;
use crate::text::FontSystem;

// Half extent of the layout box centered on the anchor; large enough that
// labels never wrap.
const LAYOUT_HALF_EXTENT: f32 = 4096.0;

/// Draws a centered label. Returns false when no face is available.
pub(super) fn draw_text(
    pixmap: &mut sk::Pixmap,
    layout: &mut Layout<()>,
    fonts: &FontSystem,
    cmd: &TextCmd,
) -> bool {
    let Some(font) = fonts.face(cmd.weight) else {
        return false;
    };
    if cmd.text.is_empty() || cmd.size <= 0.0 {
        return true;
    }

    layout.reset(&LayoutSettings {
        x: cmd.center.x - LAYOUT_HALF_EXTENT,
        y: cmd.center.y - LAYOUT_HALF_EXTENT,
        max_width: Some(2.0 * LAYOUT_HALF_EXTENT),
        max_height: Some(2.0 * LAYOUT_HALF_EXTENT),
        horizontal_align: HorizontalAlign::Center,
        vertical_align: VerticalAlign::Middle,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

    let (r, g, b, a) = (cmd.color.r, cmd.color.g, cmd.color.b, cmd.color.a);

    for glyph in layout.glyphs() {
        if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
            continue;
        }

        let (metrics, coverage) = font.rasterize_config(glyph.key);
        let Some(mut glyph_pixmap) = sk::Pixmap::new(metrics.width as u32, metrics.height as u32)
        else {
            continue;
        };

        // Color is already premultiplied; scaling every channel by coverage keeps rgb <= a.
        for (px, &cov) in glyph_pixmap.data_mut().chunks_exact_mut(4).zip(coverage.iter()) {
            let k = cov as f32 / 255.0;
            px[0] = (r * k * 255.0).round() as u8;
            px[1] = (g * k * 255.0).round() as u8;
            px[2] = (b * k * 255.0).round() as u8;
            px[3] = (a * k * 255.0).round() as u8;
        }

        pixmap.draw_pixmap(
            glyph.x.round() as i32,
            glyph.y.round() as i32,
            glyph_pixmap.as_ref(),
            &sk::PixmapPaint::default(),
            sk::Transform::identity(),
            None,
        );
    }

    true
}

pub(super) fn new_layout() -> Layout<()> {
    Layout::new(CoordinateSystem::PositiveYDown)
}
