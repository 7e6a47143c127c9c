use crate::coords::Viewport;
use crate::input::{FrameEvents, InputFrame, InputState};
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Input is read-only here: the runtime owns `InputState` / `InputFrame` and
/// clears the frame deltas after the callback returns.
pub struct FrameCtx<'a> {
    pub viewport:    Viewport,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
}

impl<'a> FrameCtx<'a> {
    /// Logical events for this frame, with a fresh claim set.
    ///
    /// Build this once per frame and hand the same value to every consumer;
    /// a second call starts with nothing claimed.
    pub fn events(&self) -> FrameEvents {
        FrameEvents::collect(self.input, self.input_frame, self.time.frame_index)
    }
}
