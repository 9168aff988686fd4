//! Failures at the remote voice service boundary.
use std::path::PathBuf;

use thiserror::Error;

/// Error raised by a [`VoiceService`](crate::VoiceService) call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The local sample handed to the cloning call does not exist.
    #[error("sample file not found: {}", .0.display())]
    SampleNotFound(PathBuf),
    /// The local sample exists but could not be read.
    #[error("sample file {} could not be read: {reason}", .path.display())]
    SampleUnreadable { path: PathBuf, reason: String },
    /// The service refused the credentials.
    #[error("authentication failed: {0}")]
    Unauthorized(String),
    /// The service answered with a non-success status.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    /// The request never produced a response.
    #[error("transport: {0}")]
    Transport(String),
    /// A success response that could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
