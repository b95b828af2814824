//! CPU rasterizer.
//!
//! Replays a [`DrawList`](crate::scene::DrawList) onto a `tiny-skia` pixmap
//! with 2D-canvas semantics: anti-aliased shapes, padded gradients, images
//! stretched to their destination rect, centered text.
//!
//! Convention:
//! - pixmap pixels are premultiplied RGBA8, sRGB encoded
//! - `DrawCmd::Clear` erases to fully transparent

mod paint;
mod rasterizer;
mod text;

pub use rasterizer::Rasterizer;
