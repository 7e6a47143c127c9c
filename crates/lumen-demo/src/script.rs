use lumen_engine::input::{InputEvent, MouseButton};

/// Builds a frame-by-frame pointer session for the headless runtime.
///
/// Each call appends one or more frames; `drag_to` spreads its motion over
/// `steps` frames so widgets see a drag on every one of them.
#[derive(Debug, Default)]
pub struct PointerScript {
    frames: Vec<Vec<InputEvent>>,
    pos: (f32, f32),
    held: Option<MouseButton>,
}

impl PointerScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n` frames with no input.
    pub fn idle(mut self, n: usize) -> Self {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(n));
        self
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.pos = (x, y);
        self.frames.push(vec![InputEvent::moved(x, y)]);
        self
    }

    pub fn press(mut self, button: MouseButton) -> Self {
        let (x, y) = self.pos;
        self.held = Some(button);
        self.frames.push(vec![InputEvent::pressed(button, x, y)]);
        self
    }

    /// Moves in a straight line to `(x, y)` over `steps` frames.
    pub fn drag_to(mut self, x: f32, y: f32, steps: usize) -> Self {
        let (x0, y0) = self.pos;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let p = (x0 + (x - x0) * t, y0 + (y - y0) * t);
            self.frames.push(vec![InputEvent::moved(p.0, p.1)]);
        }
        self.pos = (x, y);
        self
    }

    /// Releases whatever button is held. No-op otherwise.
    pub fn release(mut self) -> Self {
        if let Some(button) = self.held.take() {
            let (x, y) = self.pos;
            self.frames.push(vec![InputEvent::released(button, x, y)]);
        }
        self
    }

    /// One frame with a line-based wheel step.
    pub fn wheel(mut self, lines: f32) -> Self {
        self.frames.push(vec![InputEvent::wheel_lines(0.0, lines)]);
        self
    }

    pub fn into_frames(self) -> Vec<Vec<InputEvent>> {
        self.frames
    }
}
