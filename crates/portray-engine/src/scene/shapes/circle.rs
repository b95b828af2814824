use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{ShapeStyle, Stroke};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub style: ShapeStyle,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, style: ShapeStyle) -> Self {
        Self { center, radius, style }
    }
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn fill_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, ShapeStyle::Fill(paint.into()))));
    }

    /// Records a circle outline.
    #[inline]
    pub fn stroke_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, ShapeStyle::Stroke(stroke))));
    }
}
