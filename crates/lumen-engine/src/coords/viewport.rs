/// Viewport size in logical pixels.
///
/// The runtime hands this to the app every frame; layout code places widget
/// rects inside it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_finite_is_valid() {
        assert!(Viewport::new(640.0, 480.0).is_valid());
    }

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, f32::NAN).is_valid());
        assert!(!Viewport::default().is_valid());
    }
}
