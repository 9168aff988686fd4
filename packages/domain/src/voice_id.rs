//! Opaque voice identifier handed out by the remote cloning service.
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(pub String);

impl VoiceId {
    /// Create a new voice identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VoiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let id = VoiceId::new("21m00Tcm4TlvDq8ikWAM");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"21m00Tcm4TlvDq8ikWAM\""
        );
        let back: VoiceId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back.id(), "abc");
        assert_eq!(back.to_string(), "abc");
    }
}
