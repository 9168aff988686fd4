//! Text-to-speech.

use super::*;
use voice_cloner_domain::{AudioFormat, VoiceSettings};

/// Convert text into speech using a voice of your choice and return audio.
#[derive(Clone, Debug)]
pub struct TextToSpeech {
    voice_id: String,
    body: TextToSpeechBody,
    query: Option<TextToSpeechQuery>,
}

impl TextToSpeech {
    pub fn new(voice_id: impl Into<String>, body: TextToSpeechBody) -> Self {
        Self {
            voice_id: voice_id.into(),
            body,
            query: None,
        }
    }

    pub fn with_query(mut self, query: TextToSpeechQuery) -> Self {
        self.query = Some(query);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextToSpeechQuery {
    params: QueryValues,
}

impl TextToSpeechQuery {
    pub fn with_output_format(mut self, format: AudioFormat) -> Self {
        self.params
            .push(("output_format", format.as_api_str().to_string()));
        self
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.params
            .push(("enable_logging", enable_logging.to_string()));
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TextToSpeechBody {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<VoiceSettingsBody>,
}

impl TextToSpeechBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_voice_settings(mut self, voice_settings: impl Into<VoiceSettingsBody>) -> Self {
        self.voice_settings = Some(voice_settings.into());
        self
    }
}

/// Wire form of [`VoiceSettings`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct VoiceSettingsBody {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl From<&VoiceSettings> for VoiceSettingsBody {
    fn from(settings: &VoiceSettings) -> Self {
        Self {
            stability: settings.stability.value(),
            similarity_boost: settings.similarity_boost.value(),
            style: settings.style.value(),
            use_speaker_boost: settings.speaker_boost.is_enabled(),
        }
    }
}

impl From<VoiceSettings> for VoiceSettingsBody {
    fn from(settings: VoiceSettings) -> Self {
        Self::from(&settings)
    }
}

impl ElevenLabsEndpoint for TextToSpeech {
    const PATH: &'static str = "v1/text-to-speech/:voice_id";

    const METHOD: Method = Method::POST;

    type ResponseBody = Bytes;

    fn query_params(&self) -> Option<QueryValues> {
        self.query.as_ref().map(|q| q.params.clone())
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![(":voice_id", self.voice_id.as_str())]
    }

    async fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(&self.body)?))
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.bytes().await?)
    }
}
