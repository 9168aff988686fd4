//! Runtime configuration for the cloner.
//!
//! A [`ClonerConfig`] is built once at startup, from the environment and then
//! command-line overrides, and handed to the client and the workflows.

use std::path::{Path, PathBuf};

use thiserror::Error;
use voice_cloner_domain::{AudioFormat, ModelId};
use voice_cloner_elevenlabs::{API_KEY_ENV_VARS, ClientConfig, DEFAULT_BASE_URL, ElevenLabsClient};

use crate::registry::METADATA_FILE_NAME;

pub const BASE_URL_ENV: &str = "VOICE_CLONER_BASE_URL";
pub const TEMP_DIR_ENV: &str = "VOICE_CLONER_TEMP_DIR";
pub const CLONED_DIR_ENV: &str = "VOICE_CLONER_CLONED_DIR";

pub const DEFAULT_TEMP_DIR: &str = "temp_audio";
pub const DEFAULT_CLONED_DIR: &str = "cloned_voices";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no ElevenLabs API key found; set one of {}", API_KEY_ENV_VARS.join(", "))]
    MissingApiKey,

    #[error("could not build the ElevenLabs client: {0}")]
    Client(#[from] voice_cloner_elevenlabs::Error),
}

#[derive(Debug, Clone)]
pub struct ClonerConfig {
    /// ElevenLabs key; only the remote workflows need it.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Where generated audio is written.
    pub temp_dir: PathBuf,
    /// Sample copies and the metadata document.
    pub cloned_dir: PathBuf,
    pub default_model: ModelId,
    pub output_format: AudioFormat,
}

impl Default for ClonerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            cloned_dir: PathBuf::from(DEFAULT_CLONED_DIR),
            default_model: ModelId::default(),
            output_format: AudioFormat::default(),
        }
    }
}

impl ClonerConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: API_KEY_ENV_VARS.iter().find_map(|name| var(*name)),
            base_url: var(BASE_URL_ENV).unwrap_or(defaults.base_url),
            temp_dir: var(TEMP_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.temp_dir),
            cloned_dir: var(CLONED_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.cloned_dir),
            ..defaults
        }
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn with_cloned_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cloned_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `cloned_dir/voices_metadata.json`
    pub fn metadata_path(&self) -> PathBuf {
        self.cloned_dir.join(METADATA_FILE_NAME)
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    pub fn cloned_dir(&self) -> &Path {
        &self.cloned_dir
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(self.base_url.clone())
    }

    /// Fails with [`ConfigError::MissingApiKey`] when no key was configured.
    pub fn build_client(&self) -> Result<ElevenLabsClient, ConfigError> {
        let api_key = self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;
        Ok(ElevenLabsClient::new_with_config(
            api_key,
            self.client_config(),
        )?)
    }
}
