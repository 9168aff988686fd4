//! Output encodings accepted by the synthesis endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    /// MP3 22.05 kHz, 32 kbps CBR.
    Mp3_22050_32,
    /// MP3 44.1 kHz, 64 kbps CBR.
    Mp3_44100_64,
    /// MP3 44.1 kHz, 128 kbps CBR.
    #[default]
    Mp3_44100_128,
    /// MP3 44.1 kHz, 192 kbps CBR.
    Mp3_44100_192,
    /// 16-bit PCM at 16 kHz, mono.
    Pcm16000,
    /// 16-bit PCM at 24 kHz, mono.
    Pcm24000,
    /// 16-bit PCM at 44.1 kHz, mono.
    Pcm44100,
    /// μ-law encoded audio at 8 kHz.
    Ulaw8000,
}

impl AudioFormat {
    /// Value of the `output_format` query parameter.
    pub fn as_api_str(self) -> &'static str {
        match self {
            Self::Mp3_22050_32 => "mp3_22050_32",
            Self::Mp3_44100_64 => "mp3_44100_64",
            Self::Mp3_44100_128 => "mp3_44100_128",
            Self::Mp3_44100_192 => "mp3_44100_192",
            Self::Pcm16000 => "pcm_16000",
            Self::Pcm24000 => "pcm_24000",
            Self::Pcm44100 => "pcm_44100",
            Self::Ulaw8000 => "ulaw_8000",
        }
    }

    /// File extension for audio written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp3_22050_32 | Self::Mp3_44100_64 | Self::Mp3_44100_128 | Self::Mp3_44100_192 => {
                "mp3"
            }
            Self::Pcm16000 | Self::Pcm24000 | Self::Pcm44100 => "pcm",
            Self::Ulaw8000 => "ulaw",
        }
    }

    /// Parse the API string form (`mp3_44100_128`, `pcm_16000`, ...).
    pub fn from_api_str(s: &str) -> Option<Self> {
        [
            Self::Mp3_22050_32,
            Self::Mp3_44100_64,
            Self::Mp3_44100_128,
            Self::Mp3_44100_192,
            Self::Pcm16000,
            Self::Pcm24000,
            Self::Pcm44100,
            Self::Ulaw8000,
        ]
        .into_iter()
        .find(|format| format.as_api_str() == s)
    }
}
