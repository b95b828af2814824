//! Grid portrayal renderer.
//!
//! Turns per-step portrayal frames from an agent model (entities placed on a
//! grid with a shape tag and colors) into a `portray-engine` draw list:
//! background first, then each layer's rectangles, circles, arrow heads,
//! sprites and hospital glyphs.

pub mod assets;
pub mod config;
mod draw;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod portrayal;
pub mod renderer;
pub mod shape;

pub use assets::{AssetManifest, AssetTable, DEFAULT_ASSET_ROOT};
pub use config::GridConfig;
pub use error::{FrameReport, GridError, RenderIssue, Site};
pub use geometry::GridGeometry;
pub use interaction::{GridInteraction, InteractionHandler, MouseoverLookup, NoInteraction};
pub use portrayal::{ColorSpec, Frame, PortrayalEntity, RejectedEntity, ShapeTag};
pub use renderer::GridRenderer;
pub use shape::{Heading, ShapeKind, SpriteKind};
