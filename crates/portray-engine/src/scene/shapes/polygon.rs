use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{ShapeStyle, Stroke};

/// Closed polygon draw payload. The last point connects back to the first.
///
/// Filling uses the non-zero winding rule, so concave outlines are fine.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub style: ShapeStyle,
}

impl DrawList {
    /// Records a filled closed polygon.
    #[inline]
    pub fn fill_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, paint: impl Into<Paint>) {
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, style: ShapeStyle::Fill(paint.into()) }));
    }

    /// Records a closed polygon outline.
    #[inline]
    pub fn stroke_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, stroke: Stroke) {
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, style: ShapeStyle::Stroke(stroke) }));
    }
}
