use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle. Pass `CornerRadii::all(0.0)` for sharp corners.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        color: Color,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, color, border }));
    }
}
