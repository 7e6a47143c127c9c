mod circle;
mod rounded_rect;

pub use circle::CircleCmd;
pub use rounded_rect::RoundedRectCmd;

use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
