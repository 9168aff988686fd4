//! Voice cloning on top of the ElevenLabs API.
//!
//! A [`VoiceRegistry`] keeps the cloned voices in a local JSON document; a
//! [`VoiceCloner`] ties it to any [`VoiceService`](voice_cloner_domain::VoiceService)
//! and exposes the clone, generate, list and delete workflows.
//!
//! ```no_run
//! use std::path::Path;
//! use voice_cloner::{ClonerConfig, NoProgress, VoiceCloner};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClonerConfig::from_env();
//! let client = config.build_client()?;
//! let cloner = VoiceCloner::new(config, client);
//! cloner.ensure_dirs()?;
//!
//! let outcome = cloner
//!     .clone_and_store(Some(Path::new("me.wav")), "Me", None, NoProgress)
//!     .await;
//! println!("{}", outcome.status);
//! # Ok(())
//! # }
//! ```

pub mod cloner;
pub mod config;
pub mod progress;
pub mod registry;

pub use cloner::{CloneOutcome, DeleteOutcome, GenerateOutcome, VoiceCloner};
pub use config::{ClonerConfig, ConfigError};
pub use progress::{NoProgress, Progress, ProgressTracker};
pub use registry::{
    Deletion, METADATA_FILE_NAME, RegistryError, VoiceRecord, VoiceRegistry, parse_selection,
};
