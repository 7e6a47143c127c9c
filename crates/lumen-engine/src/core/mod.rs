//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (frame loop) and higher layers
//! (UI, demos): the [`App`] callback trait and the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
