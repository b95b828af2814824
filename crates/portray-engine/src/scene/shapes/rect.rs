use crate::coords::Rect;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{ShapeStyle, Stroke};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub style: ShapeStyle,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, style: ShapeStyle) -> Self {
        Self { rect, style }
    }
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn fill_rect(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, ShapeStyle::Fill(paint.into()))));
    }

    /// Records a rectangle outline.
    #[inline]
    pub fn stroke_rect(&mut self, z: ZIndex, rect: Rect, stroke: Stroke) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, ShapeStyle::Stroke(stroke))));
    }

    /// Records a fill-style assignment with no fill operation.
    #[inline]
    pub fn set_fill_style(&mut self, z: ZIndex, colors: Vec<Color>) {
        self.push(z, DrawCmd::SetFillStyle(colors));
    }
}
