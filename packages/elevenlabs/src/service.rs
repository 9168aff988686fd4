//! [`VoiceService`] backed by the ElevenLabs REST API.

use crate::client::ElevenLabsClient;
use crate::endpoints::admin::voice::{CreateVoice, CreateVoiceBody};
use crate::endpoints::genai::tts::{TextToSpeech, TextToSpeechBody, TextToSpeechQuery};
use log::{info, warn};
use voice_cloner_domain::{RemoteError, SynthesisRequest, VoiceId, VoiceSample, VoiceService};

impl VoiceService for ElevenLabsClient {
    async fn clone_voice(&self, sample: &VoiceSample, name: &str) -> Result<VoiceId, RemoteError> {
        let body = CreateVoiceBody::new(name).with_sample(sample.clone());
        let resp = self.hit(CreateVoice::new(body)).await?;

        if resp.requires_verification {
            warn!("Voice {} requires verification before use", resp.voice_id);
        }
        info!("Voice cloned: {name} (ID: {})", resp.voice_id);

        Ok(VoiceId::new(resp.voice_id))
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, RemoteError> {
        let body = TextToSpeechBody::new(request.text.clone())
            .with_model_id(request.model_id.as_str())
            .with_voice_settings(&request.settings);
        let query = TextToSpeechQuery::default().with_output_format(request.format);
        let endpoint = TextToSpeech::new(request.voice_id.id(), body).with_query(query);

        let audio = self.hit(endpoint).await?;
        Ok(audio.to_vec())
    }
}
