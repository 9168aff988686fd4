//! Speaker boost parameter.

/// Speaker boost setting (enable/disable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeakerBoost(bool);

impl SpeakerBoost {
    /// Create a new speaker boost setting.
    ///
    /// When enabled, the remote engine boosts similarity to the original
    /// speaker at a small latency cost.
    pub fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// Check if speaker boost is enabled.
    pub fn is_enabled(&self) -> bool {
        self.0
    }
}

impl Default for SpeakerBoost {
    fn default() -> Self {
        Self(true)
    }
}
