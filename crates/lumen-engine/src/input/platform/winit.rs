use ::winit::dpi::PhysicalPosition;
use ::winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use ::winit::keyboard::ModifiersState;

use crate::input::{
    InputEvent, InputState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta,
    PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's physical-to-logical ratio
/// (`Window::scale_factor()`). Returns `None` for events the input
/// subsystem does not represent.
pub fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            // winit 0.30 carries no position on button events; use the tracked pointer.
            let pos = state.pointer_pos.unwrap_or_default();

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: st,
                x: pos.x,
                y: pos.y,
                modifiers: state.modifiers,
            }))
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (x, y) = to_logical_f32(scale_factor, *p);
                    MouseWheelDelta::Pixel { x, y }
                }
            };
            Some(InputEvent::MouseWheel { delta, modifiers: state.modifiers })
        }

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use ::winit::event::{DeviceId, TouchPhase};

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag in synthetic events.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn cursor_moved_is_scaled_to_logical() {
        let ev = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(200.0, 40.0),
        };
        let out = translate_window_event(2.0, &InputState::default(), &ev);
        assert_eq!(out, Some(InputEvent::moved(100.0, 20.0)));
    }

    #[test]
    fn mouse_input_uses_tracked_pointer() {
        let state = InputState { pointer_pos: Some(Vec2::new(5.0, 6.0)), ..Default::default() };
        let ev = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        let out = translate_window_event(1.0, &state, &ev);
        assert_eq!(out, Some(InputEvent::pressed(MouseButton::Left, 5.0, 6.0)));
    }

    #[test]
    fn line_wheel_passes_through() {
        let ev = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -3.0),
            phase: TouchPhase::Moved,
        };
        let out = translate_window_event(1.5, &InputState::default(), &ev);
        assert_eq!(out, Some(InputEvent::wheel_lines(0.0, -3.0)));
    }

    #[test]
    fn pixel_wheel_is_scaled() {
        let ev = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0)),
            phase: TouchPhase::Moved,
        };
        let out = translate_window_event(2.0, &InputState::default(), &ev);
        assert_eq!(
            out,
            Some(InputEvent::MouseWheel {
                delta: MouseWheelDelta::Pixel { x: 0.0, y: 20.0 },
                modifiers: Modifiers::default(),
            })
        );
    }

    #[test]
    fn focus_and_leave() {
        let state = InputState::default();
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::CursorLeft { device_id: device() }),
            Some(InputEvent::PointerLeft)
        );
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let out = translate_window_event(1.0, &InputState::default(), &WindowEvent::CloseRequested);
        assert_eq!(out, None);
    }
}
