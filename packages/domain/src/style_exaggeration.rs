//! Style exaggeration parameter.

/// Style exaggeration setting between 0.0 and 1.0.
///
/// Higher values create more dramatic, expressive speech.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleExaggeration(f32);

impl StyleExaggeration {
    /// Create a new style exaggeration value, clamped into `[0.0, 1.0]`.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the style exaggeration value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for StyleExaggeration {
    fn default() -> Self {
        Self(0.0)
    }
}
