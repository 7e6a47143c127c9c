use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Closed containment: `[min, max]` on both axes.
    ///
    /// Points on any edge, including the right and bottom ones, are inside.
    /// A zero-sized rect still contains its own origin.
    #[inline]
    pub fn contains_point(self, p: Vec2) -> bool {
        let max = self.max();
        self.origin.x <= p.x && p.x <= max.x && self.origin.y <= p.y && p.y <= max.y
    }
}

/// Linearly maps `x` from `[x0, x1]` onto `[y0, y1]`.
///
/// No clamping is applied. Returns `None` when the source range is empty
/// (`x0 == x1`), where the mapping is undefined.
#[inline]
pub fn remap(x: f32, x0: f32, x1: f32, y0: f32, y1: f32) -> Option<f32> {
    let span = x1 - x0;
    if span == 0.0 {
        return None;
    }
    Some((x - x0) * (y1 - y0) / span + y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains_point ────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 100.0, 20.0).contains_point(Vec2::new(50.0, 10.0)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(10.0, 10.0)));
        assert!(r(5.0, 5.0, 10.0, 10.0).contains_point(Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains_point(Vec2::new(-0.5, 5.0)));
        assert!(!rect.contains_point(Vec2::new(5.0, -0.5)));
        assert!(!rect.contains_point(Vec2::new(10.5, 5.0)));
        assert!(!rect.contains_point(Vec2::new(5.0, 10.5)));
    }

    #[test]
    fn zero_width_contains_its_edge() {
        let rect = r(3.0, 0.0, 0.0, 10.0);
        assert!(rect.contains_point(Vec2::new(3.0, 4.0)));
        assert!(!rect.contains_point(Vec2::new(3.1, 4.0)));
    }

    #[test]
    fn nan_point_is_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(f32::NAN, 1.0)));
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn max_and_center() {
        let rect = r(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.max(), Vec2::new(110.0, 60.0));
        assert_eq!(rect.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    // ── remap ─────────────────────────────────────────────────────────────

    #[test]
    fn remap_midpoint() {
        assert_eq!(remap(75.0, 0.0, 100.0, 0.0, 1.0), Some(0.75));
    }

    #[test]
    fn remap_offset_ranges() {
        // 30 is a quarter of the way through [20, 60] → a quarter through [-1, 3].
        assert_eq!(remap(30.0, 20.0, 60.0, -1.0, 3.0), Some(0.0));
    }

    #[test]
    fn remap_does_not_clamp() {
        assert_eq!(remap(150.0, 0.0, 100.0, 0.0, 10.0), Some(15.0));
    }

    #[test]
    fn remap_empty_source_is_none() {
        assert_eq!(remap(5.0, 4.0, 4.0, 0.0, 1.0), None);
    }
}
