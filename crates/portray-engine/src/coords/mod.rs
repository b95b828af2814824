//! Coordinate and geometry types shared by the scene, the rasterizer and the grid renderer.
//!
//! Canonical surface space:
//! - Pixels of the drawing surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! Grid (model) coordinates are bottom-up; converting them is the grid renderer's job.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
