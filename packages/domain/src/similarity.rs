//! Voice similarity parameter.
//!
//! Controls how closely the synthesized voice matches the cloned sample.
//! Higher values increase similarity but may affect naturalness.

/// Voice similarity boost between 0.0 and 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity(f32);

impl Similarity {
    /// Create a new similarity value.
    ///
    /// Values outside `[0.0, 1.0]` will be clamped; NaN falls back to the default.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the similarity value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self(0.75)
    }
}
