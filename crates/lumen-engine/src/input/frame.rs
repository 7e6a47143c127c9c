use std::collections::{HashMap, HashSet};

use crate::coords::Vec2;

use super::types::{InputEvent, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held buttons, pointer position).
/// `InputFrame` provides events and transitions for the current frame only;
/// the runtime clears it after the frame is consumed.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Buttons that were held while the pointer moved this frame,
    /// keyed to the position where the button went down.
    pub drags: HashMap<MouseButton, Vec2>,

    /// Down-positions of buttons released this frame.
    ///
    /// Lets a drag that ends within the frame still resolve its origin.
    pub released_origins: HashMap<MouseButton, Vec2>,

    /// Accumulated wheel delta this frame, in lines.
    pub scroll_delta: Vec2,

    /// Number of wheel events received this frame.
    pub wheel_events: u32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.drags.clear();
        self.released_origins.clear();
        self.scroll_delta = Vec2::zero();
        self.wheel_events = 0;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn scrolled(&self) -> bool {
        self.wheel_events > 0
    }
}
