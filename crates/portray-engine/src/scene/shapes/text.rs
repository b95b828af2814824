use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Canvas default font size (`10px sans-serif`).
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Font weight requested by a text command.
///
/// The font system falls back to the regular face when no bold face is loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Text draw payload.
///
/// The text is centered horizontally and vertically on `center`
/// (canvas `textAlign = center`, `textBaseline = middle`).
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    pub center: Vec2,
}

impl DrawList {
    /// Records a centered text label.
    pub fn fill_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        weight: FontWeight,
        size: f32,
        color: Color,
        center: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            weight,
            size,
            color,
            center,
        }));
    }
}
