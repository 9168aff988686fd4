//! Per-request voice controls forwarded verbatim to the synthesis endpoint.

use crate::{Similarity, SpeakerBoost, Stability, StyleExaggeration};

/// Voice settings for a single synthesis call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoiceSettings {
    pub stability: Stability,
    pub similarity_boost: Similarity,
    pub style: StyleExaggeration,
    pub speaker_boost: SpeakerBoost,
}

impl VoiceSettings {
    /// Build settings from raw slider values; each is clamped into `[0, 1]`.
    pub fn from_values(stability: f32, similarity_boost: f32, style: f32) -> Self {
        Self {
            stability: Stability::new(stability),
            similarity_boost: Similarity::new(similarity_boost),
            style: StyleExaggeration::new(style),
            speaker_boost: SpeakerBoost::default(),
        }
    }
}
