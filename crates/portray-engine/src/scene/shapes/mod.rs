pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod lines;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod text;

use crate::paint::{Color, Paint};

/// Default canvas line width in pixels.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// Outline drawn centered on a shape's edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Hairline stroke at the canvas default width.
    #[inline]
    pub fn hairline(color: Color) -> Self {
        Self::new(DEFAULT_LINE_WIDTH, color)
    }
}

/// How a closed shape is painted: filled interior or outline.
///
/// Canvas drawing issues fill and stroke as separate operations, so a shape
/// that gets both is two draw commands.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeStyle {
    Fill(Paint),
    Stroke(Stroke),
}

impl ShapeStyle {
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, ShapeStyle::Fill(_))
    }
}
