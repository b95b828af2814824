use crate::paint::Color;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::lines::LinesCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Commands are replayed strictly in paint order; a shape that is both stroked
/// and filled is recorded as two commands in the order the caller issued them.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - handle the variant in `raster::Rasterizer`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Erase the whole surface to transparent.
    Clear,
    /// Fill style assignment with no accompanying fill. Renderers ignore it.
    SetFillStyle(Vec<Color>),
    Rect(RectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
    Lines(LinesCmd),
    Image(ImageCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Clear => "clear",
            DrawCmd::SetFillStyle(_) => "fill-style",
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Lines(_) => "lines",
            DrawCmd::Image(_) => "image",
            DrawCmd::Text(_) => "text",
        }
    }
}
