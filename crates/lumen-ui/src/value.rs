/// A scalar saturated into `[min, max]`.
///
/// `min` and `max` are fixed at construction. Every write goes through
/// [`set`](Self::set), which clamps instead of rejecting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueDomain {
    min: f32,
    max: f32,
    value: f32,
}

impl ValueDomain {
    /// Creates a domain over `[min, max]`.
    ///
    /// The starting value is `(max - min) * 0.5`, i.e. half the span with no
    /// `min` offset. For domains that do not start at zero this is not the
    /// midpoint and may even lie below `min` until the first `set`.
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "ValueDomain::new: min ({min}) > max ({max})");
        Self { min, max, value: (max - min) * 0.5 }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Stores `v` saturated into the domain. NaN saturates to `min`.
    #[inline]
    pub fn set(&mut self, v: f32) {
        self.value = if v > self.min { v.min(self.max) } else { self.min };
    }

    /// Adds `delta` through [`set`](Self::set). Returns whether the value changed.
    pub fn step(&mut self, delta: f32) -> bool {
        let before = self.value;
        self.set(before + delta);
        self.value != before
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Position of the value within the domain, in `[0, 1]`. Zero for an empty span.
    pub fn normalized(&self) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }
}
