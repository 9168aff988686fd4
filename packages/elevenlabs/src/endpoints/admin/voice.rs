//! Instant voice cloning.
//!
//! # Example
//!
//! ```no_run
//! use voice_cloner_elevenlabs::endpoints::admin::voice::{CreateVoice, CreateVoiceBody};
//! use voice_cloner_elevenlabs::{ElevenLabsClient, Result};
//! use voice_cloner_domain::VoiceSample;
//!
//! async fn example() -> Result<()> {
//!     let client = ElevenLabsClient::from_env()?;
//!     let sample = VoiceSample::new("me.wav", std::fs::read("me.wav").unwrap());
//!     let body = CreateVoiceBody::new("My Voice").with_sample(sample);
//!     let resp = client.hit(CreateVoice::new(body)).await?;
//!     println!("{}", resp.voice_id);
//!     Ok(())
//! }
//! ```

use super::*;
use voice_cloner_domain::VoiceSample;

/// Add a cloned voice built from one or more audio samples.
///
/// The returned `voice_id` is immediately usable for synthesis unless
/// `requires_verification` is set.
#[derive(Clone, Debug)]
pub struct CreateVoice {
    body: CreateVoiceBody,
}

impl CreateVoice {
    pub fn new(body: CreateVoiceBody) -> Self {
        Self { body }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreateVoiceBody {
    name: String,
    samples: Vec<VoiceSample>,
    description: Option<String>,
    remove_background_noise: Option<bool>,
}

impl CreateVoiceBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_sample(mut self, sample: VoiceSample) -> Self {
        self.samples.push(sample);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_remove_background_noise(mut self, remove: bool) -> Self {
        self.remove_background_noise = Some(remove);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[VoiceSample] {
        &self.samples
    }
}

/// MIME type sent with a sample, guessed from its extension.
pub fn mime_for_extension(extension: Option<&str>) -> &'static str {
    match extension.map(str::to_lowercase).as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a" | "mp4" | "aac") => "audio/mp4",
        Some("flac") => "audio/flac",
        Some("ogg" | "oga" | "opus") => "audio/ogg",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

impl TryFrom<&CreateVoiceBody> for RequestBody {
    type Error = Error;

    fn try_from(body: &CreateVoiceBody) -> Result<Self> {
        let mut form = Form::new().text("name", body.name.clone());

        for sample in &body.samples {
            let mime = mime_for_extension(sample.extension().as_deref());
            let part = Part::bytes(sample.data.clone())
                .file_name(sample.file_name.clone())
                .mime_str(mime)?;
            form = form.part("files", part);
        }

        if let Some(description) = &body.description {
            form = form.text("description", description.clone());
        }

        if let Some(remove) = body.remove_background_noise {
            form = form.text("remove_background_noise", remove.to_string());
        }

        Ok(RequestBody::Multipart(form))
    }
}

impl ElevenLabsEndpoint for CreateVoice {
    const PATH: &'static str = "v1/voices/add";

    const METHOD: Method = Method::POST;

    type ResponseBody = CreateVoiceResponse;

    async fn request_body(&self) -> Result<RequestBody> {
        TryInto::try_into(&self.body)
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CreateVoiceResponse {
    pub voice_id: String,
    #[serde(default)]
    pub requires_verification: bool,
}
