//! Font loading for text labels.

mod font_system;

pub use font_system::{FontLoadError, FontSystem};
