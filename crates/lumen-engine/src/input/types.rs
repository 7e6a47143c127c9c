/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse wheel delta.
///
/// `Line` is "scroll lines" style input; `Pixel` is high precision (trackpads).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Logical pixels treated as one scroll line.
    pub const PIXELS_PER_LINE: f32 = 20.0;

    /// Delta expressed in lines, whatever the source device reported.
    pub fn in_lines(self) -> (f32, f32) {
        match self {
            MouseWheelDelta::Line { x, y } => (x, y),
            MouseWheelDelta::Pixel { x, y } => {
                (x / Self::PIXELS_PER_LINE, y / Self::PIXELS_PER_LINE)
            }
        }
    }
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are where the press/release happened, so the recorded
/// down-position does not depend on a later pointer query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Platform-agnostic raw input events, in arrival order.
///
/// Platform adapters translate window system events into these.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a pointer move.
    pub fn moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    /// Shorthand for an unmodified button press at `(x, y)`.
    pub fn pressed(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    /// Shorthand for an unmodified button release at `(x, y)`.
    pub fn released(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    /// Shorthand for an unmodified line-based wheel step.
    pub fn wheel_lines(x: f32, y: f32) -> Self {
        InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x, y },
            modifiers: Modifiers::default(),
        }
    }
}
