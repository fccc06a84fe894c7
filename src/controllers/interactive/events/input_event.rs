use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Discrete input delivered by the windowing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Closed,
    /// A button press at a framebuffer pixel. The pixel may lie outside the viewport.
    Click { position: Point, button: MouseButton },
    /// Positive deltas scroll away from the user.
    WheelMoved { delta: f64 },
}

/// What the event loop should do after an event has been handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
