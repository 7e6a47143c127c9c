//! Lumen engine crate.
//!
//! Owns the platform-agnostic pieces shared by the demos: geometry, the
//! input event source, the per-frame lifecycle and the recorded draw stream.
//! GPU backends consume `scene::DrawList`; they are not part of this crate.

pub mod input;
pub mod time;
pub mod core;
pub mod runtime;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
