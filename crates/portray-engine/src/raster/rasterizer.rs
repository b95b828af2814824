use std::path::Path;

use anyhow::{Context, Result};
use fontdue::layout::Layout;
use resvg::tiny_skia as sk;

use crate::bitmap::ImageStore;
use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ImageCmd, ShapeStyle, Stroke};
use crate::text::FontSystem;

use super::paint::{shader, sk_color};
use super::text::{draw_text, new_layout};

/// Replays draw lists onto an owned pixmap.
///
/// The pixmap is reused across frames; every [`render`](Self::render) starts
/// from a transparent surface.
pub struct Rasterizer {
    pixmap: sk::Pixmap,
    layout: Layout<()>,
    warned_no_font: bool,
}

impl Rasterizer {
    /// Allocates a pixmap for `viewport`.
    pub fn new(viewport: Viewport) -> Result<Self> {
        let (w, h) = viewport
            .pixel_size()
            .with_context(|| format!("invalid raster viewport {}x{}", viewport.width, viewport.height))?;
        let pixmap = sk::Pixmap::new(w, h)
            .with_context(|| format!("failed to allocate {w}x{h} pixmap"))?;

        Ok(Self { pixmap, layout: new_layout(), warned_no_font: false })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Replays `draw_list` in paint order and returns the resulting pixmap bytes
    /// (premultiplied RGBA8).
    pub fn render(
        &mut self,
        draw_list: &mut DrawList,
        images: &ImageStore,
        fonts: &FontSystem,
    ) -> &[u8] {
        self.pixmap.fill(sk::Color::TRANSPARENT);

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Clear => self.pixmap.fill(sk::Color::TRANSPARENT),
                // Style assignment only; nothing to paint.
                DrawCmd::SetFillStyle(_) => {}
                DrawCmd::Rect(cmd) => {
                    if let Some(path) = rect_path(cmd.rect) {
                        self.paint_path(&path, &cmd.style);
                    }
                }
                DrawCmd::Circle(cmd) => {
                    if cmd.radius > 0.0 {
                        if let Some(path) = sk::PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) {
                            self.paint_path(&path, &cmd.style);
                        }
                    }
                }
                DrawCmd::Polygon(cmd) => {
                    if let Some(path) = polygon_path(&cmd.points) {
                        self.paint_path(&path, &cmd.style);
                    }
                }
                DrawCmd::Lines(cmd) => {
                    if let Some(path) = segments_path(&cmd.segments) {
                        self.stroke(&path, &cmd.stroke);
                    }
                }
                DrawCmd::Image(cmd) => self.draw_image(cmd, images),
                DrawCmd::Text(cmd) => {
                    if !draw_text(&mut self.pixmap, &mut self.layout, fonts, cmd) && !self.warned_no_font {
                        log::warn!("no font loaded; text labels are skipped");
                        self.warned_no_font = true;
                    }
                }
            }
        }

        self.pixmap.data()
    }

    /// Premultiplied RGBA8 bytes of the last rendered frame.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA of one pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// The last rendered frame as a straight-alpha image.
    pub fn to_rgba_image(&self) -> ::image::RgbaImage {
        let mut raw = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            raw.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        ::image::RgbaImage::from_raw(self.width(), self.height(), raw)
            .unwrap_or_else(|| ::image::RgbaImage::new(self.width(), self.height()))
    }

    /// Encodes the last rendered frame as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()
            .save_with_format(path, ::image::ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    // ── painting helpers ──────────────────────────────────────────────────

    fn paint_path(&mut self, path: &sk::Path, style: &ShapeStyle) {
        match style {
            ShapeStyle::Fill(paint) => self.fill(path, paint),
            ShapeStyle::Stroke(stroke) => self.stroke(path, stroke),
        }
    }

    fn fill(&mut self, path: &sk::Path, paint: &Paint) {
        let Some(shader) = shader(paint) else { return };
        let mut sk_paint = sk::Paint::default();
        sk_paint.shader = shader;
        sk_paint.anti_alias = true;
        self.pixmap
            .fill_path(path, &sk_paint, sk::FillRule::Winding, sk::Transform::identity(), None);
    }

    fn stroke(&mut self, path: &sk::Path, stroke: &Stroke) {
        if stroke.width <= 0.0 {
            return;
        }
        let mut sk_paint = sk::Paint::default();
        sk_paint.set_color(sk_color(stroke.color));
        sk_paint.anti_alias = true;
        let sk_stroke = sk::Stroke { width: stroke.width, ..sk::Stroke::default() };
        self.pixmap
            .stroke_path(path, &sk_paint, &sk_stroke, sk::Transform::identity(), None);
    }

    fn draw_image(&mut self, cmd: &ImageCmd, images: &ImageStore) {
        let Some(bitmap) = images.ready(cmd.image) else {
            log::trace!("image {:?} not ready; skipped", cmd.image);
            return;
        };
        let dest = cmd.dest.normalized();
        if dest.is_empty() || !dest.is_finite() {
            return;
        }
        let Some(src) = sk::PixmapRef::from_bytes(bitmap.pixels(), bitmap.width(), bitmap.height())
        else {
            return;
        };

        let sx = dest.size.x / bitmap.width() as f32;
        let sy = dest.size.y / bitmap.height() as f32;
        let transform = sk::Transform::from_row(sx, 0.0, 0.0, sy, dest.origin.x, dest.origin.y);
        let paint = sk::PixmapPaint { quality: sk::FilterQuality::Bilinear, ..sk::PixmapPaint::default() };

        self.pixmap.draw_pixmap(0, 0, src, &paint, transform, None);
    }
}

fn rect_path(rect: Rect) -> Option<sk::Path> {
    let r = rect.normalized();
    let sk_rect = sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)?;
    Some(sk::PathBuilder::from_rect(sk_rect))
}

fn polygon_path(points: &[Vec2]) -> Option<sk::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

fn segments_path(segments: &[(Vec2, Vec2)]) -> Option<sk::Path> {
    let mut pb = sk::PathBuilder::new();
    for (a, b) in segments {
        pb.move_to(a.x, a.y);
        pb.line_to(b.x, b.y);
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::paint::{Color, ColorStop, LinearGradient, RadialGradient};
    use crate::scene::ZIndex;

    const Z: ZIndex = ZIndex(0);

    fn raster(w: f32, h: f32) -> Rasterizer {
        Rasterizer::new(Viewport::new(w, h)).unwrap()
    }

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    // ── surface ───────────────────────────────────────────────────────────

    #[test]
    fn invalid_viewport_is_rejected() {
        assert!(Rasterizer::new(Viewport::new(0.0, 10.0)).is_err());
    }

    #[test]
    fn clear_erases_earlier_commands() {
        let mut r = raster(10.0, 10.0);
        let mut list = DrawList::new();
        list.fill_rect(Z, Rect::new(0.0, 0.0, 10.0, 10.0), red());
        list.push(Z, DrawCmd::Clear);
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());
        assert_eq!(r.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn solid_rect_fills_interior_only() {
        let mut r = raster(20.0, 20.0);
        let mut list = DrawList::new();
        list.fill_rect(Z, Rect::new(5.0, 5.0, 10.0, 10.0), red());
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());
        assert_eq!(r.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(r.pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn single_stop_gradient_is_solid() {
        let mut r = raster(20.0, 20.0);
        let mut list = DrawList::new();
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(20.0, 20.0), vec![ColorStop::new(0.0, red())]);
        list.fill_rect(Z, Rect::new(0.0, 0.0, 20.0, 20.0), g);
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());
        assert_eq!(r.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(r.pixel(18, 18), Some([255, 0, 0, 255]));
    }

    #[test]
    fn inward_radial_keeps_first_stop_on_rim() {
        let blue = Color::from_srgb_u8(0, 0, 255, 255);
        let mut r = raster(100.0, 100.0);
        let mut list = DrawList::new();
        let center = Vec2::new(50.0, 50.0);
        let g = RadialGradient::concentric(center, 40.0, 0.0, ColorStop::evenly_spaced(&[red(), blue]));
        list.fill_circle(Z, center, 40.0, g);
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());

        // Center is past the last stop (offset 0.5 maps to 20px): pure blue.
        let [cr, _, cb, _] = r.pixel(50, 50).unwrap();
        assert!(cb > 240 && cr < 15);
        // Just inside the rim: mostly red.
        let [rr, _, rb, _] = r.pixel(50, 12).unwrap();
        assert!(rr > rb);
    }

    #[test]
    fn concave_polygon_leaves_notch_empty() {
        let mut r = raster(40.0, 40.0);
        let mut list = DrawList::new();
        // Arrowhead pointing up with a notch at y = 30.
        let pts = vec![
            Vec2::new(20.0, 0.0),
            Vec2::new(0.0, 40.0),
            Vec2::new(20.0, 30.0),
            Vec2::new(40.0, 40.0),
        ];
        list.fill_polygon(Z, pts, red());
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());
        assert_eq!(r.pixel(20, 15).map(|p| p[3]), Some(255));
        assert_eq!(r.pixel(20, 36).map(|p| p[3]), Some(0));
    }

    // ── images ────────────────────────────────────────────────────────────

    #[test]
    fn image_is_stretched_to_dest() {
        let mut images = ImageStore::new();
        let id = images.insert("green", Bitmap::solid(2, 2, [0, 255, 0, 255]).unwrap());

        let mut r = raster(50.0, 50.0);
        let mut list = DrawList::new();
        list.draw_image(Z, id, Rect::new(0.0, 0.0, 50.0, 50.0));
        r.render(&mut list, &images, &FontSystem::new());
        assert_eq!(r.pixel(25, 25), Some([0, 255, 0, 255]));
        assert_eq!(r.pixel(48, 48), Some([0, 255, 0, 255]));
    }

    #[test]
    fn pending_image_draws_nothing() {
        let mut images = ImageStore::new();
        let id = images.reserve("late");

        let mut r = raster(10.0, 10.0);
        let mut list = DrawList::new();
        list.draw_image(Z, id, Rect::new(0.0, 0.0, 10.0, 10.0));
        r.render(&mut list, &images, &FontSystem::new());
        assert_eq!(r.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_without_font_is_skipped() {
        let mut r = raster(10.0, 10.0);
        let mut list = DrawList::new();
        list.fill_text(Z, "7", crate::scene::FontWeight::Bold, 12.0, Color::black(), Vec2::new(5.0, 5.0));
        r.render(&mut list, &ImageStore::new(), &FontSystem::new());
        assert_eq!(r.pixel(5, 5), Some([0, 0, 0, 0]));
    }
}
