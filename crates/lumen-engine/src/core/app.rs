use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once before the first frame.
    fn on_start(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once per frame, after that frame's input has been collected.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
