//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::{remap, Rect};
pub use vec2::Vec2;
pub use viewport::Viewport;
