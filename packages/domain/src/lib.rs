//! # Voice Cloner Domain
//!
//! Shared domain objects for the voice-cloner workspace.
//!
//! This crate contains the value types passed between the local voice
//! registry, the workflows and the remote engine, plus the [`VoiceService`]
//! trait that marks the network boundary.

pub mod audio_format;
pub mod model_id;
pub mod remote_error;
pub mod similarity;
pub mod speaker_boost;
pub mod stability;
pub mod style_exaggeration;
pub mod voice_id;
pub mod voice_sample;
pub mod voice_service;
pub mod voice_settings;

// Re-export core types
pub use audio_format::AudioFormat;
pub use model_id::ModelId;
pub use remote_error::RemoteError;
pub use similarity::Similarity;
pub use speaker_boost::SpeakerBoost;
pub use stability::Stability;
pub use style_exaggeration::StyleExaggeration;
pub use voice_id::VoiceId;
pub use voice_sample::VoiceSample;
pub use voice_service::{SynthesisRequest, VoiceService};
pub use voice_settings::VoiceSettings;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AudioFormat, ModelId, RemoteError, Similarity, SpeakerBoost, Stability,
        StyleExaggeration, SynthesisRequest, VoiceId, VoiceSample, VoiceService, VoiceSettings,
    };
}
