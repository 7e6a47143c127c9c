//! Paint model shared between UI and renderers.
//!
//! Only solid fills exist for now. Geometry types live in `coords`.

mod color;

pub use color::Color;
