use crate::endpoints::{ElevenLabsEndpoint, RequestBody};
use crate::error::{Error, Result};
use log::debug;
use reqwest::{Url, header::CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

const XI_API_KEY_HEADER: &str = "xi-api-key";
const APPLICATION_JSON: &str = "application/json";

/// Environment variables checked, in order, for the ElevenLabs API key.
pub const API_KEY_ENV_VARS: [&str; 3] =
    ["ELEVENLABS_API_KEY", "ELEVEN_API_KEY", "ELEVEN_LABS_API_KEY"];

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Connection settings for [`ElevenLabsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin (optionally with a path prefix) every endpoint path is appended to
    pub base_url: String,
    /// Whole-request timeout; cloning uploads and long syntheses need headroom
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Read the API key from the first non-empty variable in [`API_KEY_ENV_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

#[derive(Clone)]
pub struct ElevenLabsClient {
    inner: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("api_key", &mask(&self.api_key))
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ElevenLabsClient {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(ClientConfig::default())
    }

    pub fn from_env_with_config(config: ClientConfig) -> Result<Self> {
        let api_key = api_key_from_env().ok_or(Error::MissingApiKey)?;
        Self::new_with_config(api_key, config)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::new_with_config(api_key, ClientConfig::default())
    }

    pub fn new_with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let base_url = Url::parse(&config.base_url)?;
        debug!("Using API key {} against {}", mask(&api_key), base_url);

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("voice-cloner/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner,
            api_key,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn hit<T: ElevenLabsEndpoint>(&self, endpoint: T) -> Result<T::ResponseBody> {
        let url = endpoint.url(&self.base_url)?;
        debug!("{} {}", T::METHOD, url.path());

        let mut builder = self
            .inner
            .request(T::METHOD, url)
            .header(XI_API_KEY_HEADER, &self.api_key);

        if T::METHOD == reqwest::Method::POST || T::METHOD == reqwest::Method::PATCH {
            builder = match endpoint.request_body().await? {
                RequestBody::Json(json) => {
                    builder.header(CONTENT_TYPE, APPLICATION_JSON).json(&json)
                }
                RequestBody::Multipart(form) => builder.multipart(form),
                RequestBody::Empty => return Err(Error::EmptyRequestBody),
            };
        }

        let resp = builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await?;
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            debug!("{} answered {}: {}", T::PATH, status, body);
            return Err(Error::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        endpoint.response_body(resp).await
    }
}

const MASK_PREFIX_CHARS: usize = 4;

/// Keys shorter than this are masked completely.
const MASK_MIN_REVEAL_LEN: usize = 12;

fn mask(key: &str) -> String {
    let len = key.chars().count();
    if len < MASK_MIN_REVEAL_LEN {
        return format!("*** (length: {len})");
    }
    let prefix: String = key.chars().take(MASK_PREFIX_CHARS).collect();
    format!("{prefix}… (length: {len})")
}
