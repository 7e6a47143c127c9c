/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Order is top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Uniform radius on all four corners. Negative input is treated as zero.
    #[inline]
    pub fn all(r: f32) -> Self {
        let r = r.max(0.0);
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }
}
