use crate::coords::Vec2;

/// Keys the viewer reacts to; everything else is `Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    R,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Input delivered to a viewer app. Positions are canvas pixels
/// (top-left origin), already corrected for window scaling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerEvent {
    PointerMoved(Vec2),
    PointerLeft,
    Click { button: MouseButton, at: Vec2 },
    /// Key press; releases and auto-repeat are not reported.
    KeyPressed(Key),
}
