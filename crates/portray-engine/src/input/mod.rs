//! Viewer input events.
//!
//! The runtime translates platform events into [`ViewerEvent`]s expressed in
//! canvas pixels, so hosts never see window coordinates.

mod types;

pub use types::{Key, MouseButton, ViewerEvent};
