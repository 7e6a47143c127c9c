use std::collections::{HashMap, HashSet};

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::state::InputState;
use super::types::MouseButton;

/// Identifies one logical event within a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventId {
    /// Pointer moved while `button` was held.
    Drag(MouseButton),
    /// Wheel / trackpad scroll.
    Scroll,
}

/// A drag that fired this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragEvent {
    pub button: MouseButton,
    /// Pointer position at the end of the frame.
    pub current: Vec2,
}

/// A scroll that fired this frame. `delta` is in lines, +y as reported by the platform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollEvent {
    pub delta: Vec2,
}

/// Logical input events for one frame, with exclusive-claim arbitration.
///
/// Each event can be claimed at most once per frame. Consumers are expected
/// to check [`is_fired`](Self::is_fired) and [`is_consumed`](Self::is_consumed)
/// before doing their own hit-testing, then call [`try_claim`](Self::try_claim)
/// before acting. Claiming requires `&mut self`, so two consumers can never
/// observe the same event as unclaimed.
///
/// Built from the runtime's `InputState` / `InputFrame` with [`collect`](Self::collect),
/// or directly with the `with_*` builders.
#[derive(Debug, Default, Clone)]
pub struct FrameEvents {
    frame_index: u64,
    pointer: Option<Vec2>,
    down_positions: HashMap<MouseButton, Vec2>,
    drags: HashSet<MouseButton>,
    scroll: Option<Vec2>,
    claimed: HashSet<EventId>,
}

impl FrameEvents {
    /// Empty event set: nothing fired, no pointer.
    pub fn new(frame_index: u64) -> Self {
        Self { frame_index, ..Self::default() }
    }

    /// Derives this frame's logical events from the accumulated input.
    pub fn collect(state: &InputState, frame: &InputFrame, frame_index: u64) -> Self {
        let mut down_positions = state.buttons_down.clone();
        for (button, origin) in &frame.released_origins {
            down_positions.entry(*button).or_insert(*origin);
        }

        // A drag needs a pointer position to report.
        let drags = if state.pointer_pos.is_some() {
            frame.drags.keys().copied().collect()
        } else {
            HashSet::new()
        };

        Self {
            frame_index,
            pointer: state.pointer_pos,
            down_positions,
            drags,
            scroll: frame.scrolled().then_some(frame.scroll_delta),
            claimed: HashSet::new(),
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn with_pointer(mut self, pos: Vec2) -> Self {
        self.pointer = Some(pos);
        self
    }

    /// Records `button` as held since `pos` without firing a drag.
    pub fn with_button_down(mut self, button: MouseButton, pos: Vec2) -> Self {
        self.down_positions.insert(button, pos);
        self
    }

    /// Fires a drag for `button` that started at `start`.
    pub fn with_drag(mut self, button: MouseButton, start: Vec2) -> Self {
        self.down_positions.insert(button, start);
        self.drags.insert(button);
        self
    }

    pub fn with_scroll(mut self, delta: Vec2) -> Self {
        self.scroll = Some(delta);
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Current pointer position, if the pointer is over the surface.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Where `button` went down, or `None` if it is not held (and was not released this frame).
    #[inline]
    pub fn down_position(&self, button: MouseButton) -> Option<Vec2> {
        self.down_positions.get(&button).copied()
    }

    /// Active down-positions keyed by button.
    pub fn down_positions(&self) -> impl Iterator<Item = (MouseButton, Vec2)> + '_ {
        self.down_positions.iter().map(|(b, p)| (*b, *p))
    }

    /// The drag for `button`, if one fired this frame. Does not look at claims.
    pub fn drag(&self, button: MouseButton) -> Option<DragEvent> {
        if !self.drags.contains(&button) {
            return None;
        }
        let current = self.pointer?;
        Some(DragEvent { button, current })
    }

    /// The scroll, if one fired this frame. Does not look at claims.
    pub fn scroll(&self) -> Option<ScrollEvent> {
        self.scroll.map(|delta| ScrollEvent { delta })
    }

    pub fn is_fired(&self, id: EventId) -> bool {
        match id {
            EventId::Drag(button) => self.drag(button).is_some(),
            EventId::Scroll => self.scroll.is_some(),
        }
    }

    pub fn is_consumed(&self, id: EventId) -> bool {
        self.claimed.contains(&id)
    }

    /// Claims `id` for the caller.
    ///
    /// Returns `true` exactly once per frame for an event that fired;
    /// `false` if it did not fire or someone else already claimed it.
    pub fn try_claim(&mut self, id: EventId) -> bool {
        if !self.is_fired(id) {
            return false;
        }
        let won = self.claimed.insert(id);
        if won {
            log::trace!("frame {}: {:?} claimed", self.frame_index, id);
        }
        won
    }
}
