use serde_json::Value;
use thiserror::Error;
use voice_cloner_domain::RemoteError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("base URL cannot hold endpoint paths: {0}")]
    UnsupportedBaseUrl(String),
    #[error("http error {status}: {}", detail_message(.body))]
    HttpError { status: u16, body: Value },
    #[error(
        "No ElevenLabs API key found. Set ELEVENLABS_API_KEY, ELEVEN_API_KEY, or ELEVEN_LABS_API_KEY environment variable"
    )]
    MissingApiKey,
    #[error("request must have a body")]
    EmptyRequestBody,
}

/// Pull the human-readable part out of an API error document.
///
/// The API answers with `{"detail": {"status": .., "message": ..}}`, with
/// `{"detail": "text"}`, or with a list of validation errors.
pub(crate) fn detail_message(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.get("msg")
                    .and_then(Value::as_str)
                    .map_or_else(|| item.to_string(), str::to_string)
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(detail) => detail
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| detail.to_string(), str::to_string),
        None => match body {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    }
}

impl From<Error> for RemoteError {
    fn from(error: Error) -> Self {
        match error {
            Error::HttpError { status, body } => {
                let detail = detail_message(&body);
                if status == 401 || status == 403 {
                    RemoteError::Unauthorized(detail)
                } else {
                    RemoteError::Rejected { status, detail }
                }
            }
            Error::MissingApiKey => RemoteError::Unauthorized(Error::MissingApiKey.to_string()),
            Error::ReqwestError(e) if e.is_decode() => RemoteError::InvalidResponse(e.to_string()),
            Error::SerdeError(e) => RemoteError::InvalidResponse(e.to_string()),
            other => RemoteError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_message_shapes() {
        let nested = json!({"detail": {"status": "quota_exceeded", "message": "Out of credits"}});
        assert_eq!(detail_message(&nested), "Out of credits");

        let flat = json!({"detail": "Voice not found"});
        assert_eq!(detail_message(&flat), "Voice not found");

        let validation = json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]});
        assert_eq!(detail_message(&validation), "field required");

        let raw = Value::String("Bad Gateway".into());
        assert_eq!(detail_message(&raw), "Bad Gateway");
    }

    #[test]
    fn http_status_maps_to_remote_error() {
        let unauthorized = Error::HttpError {
            status: 401,
            body: json!({"detail": {"status": "invalid_api_key", "message": "Invalid API key"}}),
        };
        assert_eq!(
            RemoteError::from(unauthorized),
            RemoteError::Unauthorized("Invalid API key".into())
        );

        let rejected = Error::HttpError {
            status: 400,
            body: json!({"detail": "sample too short"}),
        };
        assert_eq!(
            RemoteError::from(rejected),
            RemoteError::Rejected {
                status: 400,
                detail: "sample too short".into()
            }
        );
    }

    #[test]
    fn missing_key_is_an_auth_failure() {
        assert!(matches!(
            RemoteError::from(Error::MissingApiKey),
            RemoteError::Unauthorized(msg) if msg.contains("ELEVENLABS_API_KEY")
        ));
    }
}
