//! Input subsystem.
//!
//! Public API is platform-agnostic. Platform adapters under [`platform`]
//! translate window system events into `InputEvent`s; the runtime folds them
//! into `InputState` / `InputFrame`; widgets read the frame's logical events
//! through [`FrameEvents`].

mod events;
mod frame;
mod state;
mod types;

pub mod platform;

pub use events::{DragEvent, EventId, FrameEvents, ScrollEvent};
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
