//! Time subsystem.
//!
//! One `FrameClock` per frame loop. Call `tick()` (or `tick_at()` when the
//! caller owns the timeline, as the headless runtime does) once per frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
