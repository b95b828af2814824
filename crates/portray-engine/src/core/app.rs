use crate::input::ViewerEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Contract between the window runtime and a host.
pub trait App {
    /// Called for each translated input event.
    fn on_event(&mut self, event: ViewerEvent, window: &WindowCtx<'_>) -> AppControl {
        let _ = (event, window);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
