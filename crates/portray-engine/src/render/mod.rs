//! GPU presentation.
//!
//! Frames are rasterized on the CPU; this module only uploads the finished
//! pixmap and draws it over the window surface.

mod blit;
mod ctx;

pub use blit::PixmapBlitter;
pub use ctx::{RenderCtx, RenderTarget};
