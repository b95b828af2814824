//! Decoded images and their load state.
//!
//! Images are decoded once (PNG/JPEG/BMP/GIF through `image`, SVG through
//! `resvg`) into premultiplied RGBA so the rasterizer can blit them without
//! conversion. Every slot carries an explicit state; a slot that is not
//! `Ready` is never drawn as image data.

mod decode;
mod store;

pub use decode::{decode_bytes, decode_file, Bitmap, ImageLoadError};
pub use store::{ImageId, ImageState, ImageStore};
