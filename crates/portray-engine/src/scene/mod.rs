//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in canvas order
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{
    circle::CircleCmd, image::ImageCmd, lines::LinesCmd, polygon::PolygonCmd, rect::RectCmd,
    text::{FontWeight, TextCmd, DEFAULT_FONT_SIZE},
    ShapeStyle, Stroke,
};
pub use z_index::ZIndex;
