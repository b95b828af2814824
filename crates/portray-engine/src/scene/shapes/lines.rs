use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Independent line segments stroked as one path.
#[derive(Debug, Clone, PartialEq)]
pub struct LinesCmd {
    pub segments: Vec<(Vec2, Vec2)>,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a batch of line segments sharing one stroke.
    #[inline]
    pub fn stroke_lines(&mut self, z: ZIndex, segments: Vec<(Vec2, Vec2)>, stroke: Stroke) {
        self.push(z, DrawCmd::Lines(LinesCmd { segments, stroke }));
    }
}
