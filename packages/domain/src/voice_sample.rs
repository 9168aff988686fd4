//! In-memory copy of a local audio sample destined for voice cloning.
use std::path::Path;

use crate::RemoteError;

/// Raw sample bytes plus the file name presented to the remote service.
///
/// No decoding or duration check happens here; the remote service owns
/// every judgement about the audio content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSample {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl VoiceSample {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Read a sample from disk.
    ///
    /// Fails with [`RemoteError::SampleNotFound`] when `path` does not exist and
    /// [`RemoteError::SampleUnreadable`] when it cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RemoteError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RemoteError::SampleNotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| RemoteError::SampleUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sample.wav".to_string());

        Ok(Self { file_name, data })
    }

    /// Lower-cased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }
}
