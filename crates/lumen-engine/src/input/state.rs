use std::collections::HashMap;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels. `None` while outside the surface.
    pub pointer_pos: Option<Vec2>,

    /// Currently held mouse buttons and where each went down.
    pub buttons_down: HashMap<MouseButton, Vec2>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Drop held buttons on focus loss; the release will never arrive.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                for (button, origin) in &self.buttons_down {
                    frame.drags.entry(*button).or_insert(*origin);
                }
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent {
                                          button,
                                          state,
                                          x,
                                          y,
                                          modifiers,
                                      }) => {
                let pos = Vec2::new(*x, *y);
                self.pointer_pos = Some(pos);
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if !self.buttons_down.contains_key(button) {
                            self.buttons_down.insert(*button, pos);
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if let Some(origin) = self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                            frame.released_origins.insert(*button, origin);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                let (dx, dy) = delta.in_lines();
                frame.scroll_delta = frame.scroll_delta + Vec2::new(dx, dy);
                frame.wheel_events += 1;
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains_key(&btn)
    }

    /// Where `btn` went down, if it is still held.
    pub fn down_position(&self, btn: MouseButton) -> Option<Vec2> {
        self.buttons_down.get(&btn).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn apply_all(events: Vec<InputEvent>) -> (InputState, InputFrame) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for ev in events {
            state.apply_event(&mut frame, ev);
        }
        (state, frame)
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn press_records_down_position() {
        let (state, frame) = apply_all(vec![InputEvent::pressed(MouseButton::Left, 12.0, 4.0)]);
        assert_eq!(state.down_position(MouseButton::Left), Some(Vec2::new(12.0, 4.0)));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(12.0, 4.0)));
    }

    #[test]
    fn repeated_press_keeps_first_origin() {
        let (state, frame) = apply_all(vec![
            InputEvent::pressed(MouseButton::Left, 1.0, 1.0),
            InputEvent::pressed(MouseButton::Left, 9.0, 9.0),
        ]);
        assert_eq!(state.down_position(MouseButton::Left), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(frame.buttons_pressed.len(), 1);
    }

    #[test]
    fn release_moves_origin_into_frame() {
        let (state, frame) = apply_all(vec![
            InputEvent::pressed(MouseButton::Right, 3.0, 4.0),
            InputEvent::released(MouseButton::Right, 30.0, 4.0),
        ]);
        assert!(!state.button_down(MouseButton::Right));
        assert!(frame.buttons_released.contains(&MouseButton::Right));
        assert_eq!(frame.released_origins.get(&MouseButton::Right), Some(&Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (_, frame) = apply_all(vec![InputEvent::released(MouseButton::Left, 0.0, 0.0)]);
        assert!(frame.buttons_released.is_empty());
        assert!(frame.released_origins.is_empty());
    }

    // ── drags ─────────────────────────────────────────────────────────────

    #[test]
    fn move_while_held_records_drag() {
        let (_, frame) = apply_all(vec![
            InputEvent::pressed(MouseButton::Left, 50.0, 10.0),
            InputEvent::moved(60.0, 10.0),
            InputEvent::moved(75.0, 10.0),
        ]);
        assert_eq!(frame.drags.get(&MouseButton::Left), Some(&Vec2::new(50.0, 10.0)));
    }

    #[test]
    fn move_without_buttons_is_not_a_drag() {
        let (state, frame) = apply_all(vec![InputEvent::moved(5.0, 5.0)]);
        assert!(frame.drags.is_empty());
        assert_eq!(state.pointer_pos, Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let (state, _) = apply_all(vec![
            InputEvent::pressed(MouseButton::Left, 0.0, 0.0),
            InputEvent::Focused(false),
        ]);
        assert!(state.buttons_down.is_empty());
        assert!(!state.focused);
    }

    #[test]
    fn pointer_left_clears_position() {
        let (state, _) = apply_all(vec![InputEvent::moved(5.0, 5.0), InputEvent::PointerLeft]);
        assert_eq!(state.pointer_pos, None);
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_deltas_accumulate_in_lines() {
        let (_, frame) = apply_all(vec![
            InputEvent::wheel_lines(0.0, 1.0),
            InputEvent::MouseWheel {
                delta: MouseWheelDelta::Pixel { x: 0.0, y: 20.0 },
                modifiers: Modifiers::default(),
            },
        ]);
        assert_eq!(frame.scroll_delta, Vec2::new(0.0, 2.0));
        assert_eq!(frame.wheel_events, 2);
        assert!(frame.scrolled());
    }

    #[test]
    fn clear_resets_frame() {
        let (_, mut frame) = apply_all(vec![
            InputEvent::pressed(MouseButton::Left, 0.0, 0.0),
            InputEvent::moved(1.0, 0.0),
            InputEvent::wheel_lines(0.0, 1.0),
        ]);
        frame.clear();
        assert!(frame.events.is_empty());
        assert!(frame.drags.is_empty());
        assert!(!frame.scrolled());
        assert_eq!(frame.scroll_delta, Vec2::zero());
    }
}
