//! Frame timing.
//!
//! One [`FrameClock`] per window yields deltas; a [`PlaybackPacer`] turns
//! those deltas into fixed-interval playback steps.

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::PlaybackPacer;
