//! Frame loop.
//!
//! Drives the input → app → clear cycle. Windowing is left to the host; this
//! runtime replays per-frame batches of platform-agnostic input events, which
//! is how the demos run headless and how the frame lifecycle is tested.

mod runner;

pub use runner::{RunSummary, Runtime, RuntimeConfig};
