//! ElevenLabs engine for voice-cloner.
//!
//! Thin, typed access to the two endpoints the workspace needs: instant
//! voice cloning (`POST /v1/voices/add`) and text-to-speech
//! (`POST /v1/text-to-speech/{voice_id}`). [`ElevenLabsClient`] implements
//! [`voice_cloner_domain::VoiceService`], which is how the rest of the
//! workspace talks to it.
//!
//! # Usage
//!
//! ```no_run
//! use voice_cloner_domain::{ModelId, SynthesisRequest, VoiceId, VoiceService};
//! use voice_cloner_elevenlabs::ElevenLabsClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ElevenLabsClient::from_env()?;
//! let request = SynthesisRequest::new("Hello!", VoiceId::new("abc"), ModelId::default());
//! let audio = client.synthesize(&request).await?;
//! std::fs::write("hello.mp3", audio)?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoints;
mod error;
mod service;

pub use client::{
    API_KEY_ENV_VARS, ClientConfig, DEFAULT_BASE_URL, ElevenLabsClient, api_key_from_env,
};
pub use error::{Error, Result};
