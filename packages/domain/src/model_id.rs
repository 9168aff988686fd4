//! Synthesis model identifiers.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    /// Multilingual model v2.
    #[default]
    MultilingualV2,
    /// English-only model v1.
    MonolingualV1,
    /// Any other model identifier, passed through verbatim.
    Custom(String),
}

impl ModelId {
    /// The identifier string the remote API expects.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MultilingualV2 => "eleven_multilingual_v2",
            Self::MonolingualV1 => "eleven_monolingual_v1",
            Self::Custom(id) => id,
        }
    }

    /// Human-readable label shown next to the identifier.
    pub fn label(&self) -> &str {
        match self {
            Self::MultilingualV2 => "Multilingual (recommended)",
            Self::MonolingualV1 => "Monolingual v1",
            Self::Custom(id) => id,
        }
    }

    /// Built-in models offered to the user, default first.
    pub fn available() -> [ModelId; 2] {
        [Self::MultilingualV2, Self::MonolingualV1]
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ModelId {
    fn from(id: String) -> Self {
        match id.as_str() {
            "eleven_multilingual_v2" => Self::MultilingualV2,
            "eleven_monolingual_v1" => Self::MonolingualV1,
            _ => Self::Custom(id),
        }
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        match model {
            ModelId::Custom(id) => id,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for ModelId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_map_to_variants() {
        assert_eq!(
            "eleven_multilingual_v2".parse::<ModelId>().unwrap(),
            ModelId::MultilingualV2
        );
        assert_eq!(ModelId::from("eleven_monolingual_v1"), ModelId::MonolingualV1);
        assert_eq!(
            ModelId::from("eleven_turbo_v2_5"),
            ModelId::Custom("eleven_turbo_v2_5".into())
        );
    }

    #[test]
    fn serde_uses_api_strings() {
        let json = serde_json::to_string(&ModelId::MonolingualV1).unwrap();
        assert_eq!(json, "\"eleven_monolingual_v1\"");

        let custom: ModelId = serde_json::from_str("\"eleven_flash_v2_5\"").unwrap();
        assert_eq!(custom.as_str(), "eleven_flash_v2_5");
    }

    #[test]
    fn default_is_first_available() {
        assert_eq!(ModelId::default(), ModelId::available()[0]);
        assert_eq!(ModelId::default().label(), "Multilingual (recommended)");
    }
}
