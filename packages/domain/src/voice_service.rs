//! The remote cloning/synthesis boundary.
//!
//! Engines implement [`VoiceService`]; everything upstream of it (registry,
//! workflows, front ends) is written against the trait so that tests can
//! substitute an in-memory fake for the network.

use crate::{AudioFormat, ModelId, RemoteError, VoiceId, VoiceSample, VoiceSettings};

/// Everything the synthesis endpoint needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: VoiceId,
    pub model_id: ModelId,
    pub settings: VoiceSettings,
    pub format: AudioFormat,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice_id: VoiceId, model_id: ModelId) -> Self {
        Self {
            text: text.into(),
            voice_id,
            model_id,
            settings: VoiceSettings::default(),
            format: AudioFormat::default(),
        }
    }

    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }
}

/// Opaque remote service offering voice cloning and speech synthesis.
#[allow(async_fn_in_trait)]
pub trait VoiceService {
    /// Upload `sample` under the display name `name` and return the new voice id.
    async fn clone_voice(&self, sample: &VoiceSample, name: &str) -> Result<VoiceId, RemoteError>;

    /// Synthesize `request.text` with the given voice and return encoded audio.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, RemoteError>;
}
