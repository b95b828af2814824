//! Portray engine crate.
//!
//! Drawing primitives for the grid renderer: the paint model, a z-ordered
//! draw-command stream, image and font stores, a CPU rasterizer and the GPU
//! window that presents rasterized frames.

pub mod bitmap;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;
