//! The user-facing workflows: clone, generate, list and delete.
//!
//! Every workflow reports its result as a value carrying a status line. Errors
//! from the registry or the remote service end up in that status text, never
//! as an `Err` to the caller.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{info, warn};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use voice_cloner_domain::{ModelId, SynthesisRequest, VoiceSample, VoiceService, VoiceSettings};

use crate::config::ClonerConfig;
use crate::progress::Progress;
use crate::registry::{
    RegistryError, VoiceRecord, VoiceRegistry, parse_selection, selection_voice_id,
};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Generated audio names carry milliseconds; same-millisecond calls get a counter.
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

/// Result of [`VoiceCloner::clone_and_store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    /// The stored record, `None` on failure.
    pub record: Option<VoiceRecord>,
    pub status: String,
}

impl CloneOutcome {
    fn failed(status: impl Into<String>) -> Self {
        Self {
            record: None,
            status: status.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.record.is_some()
    }

    /// The stored record as pretty-printed JSON.
    pub fn record_json(&self) -> Option<String> {
        self.record
            .as_ref()
            .and_then(|record| serde_json::to_string_pretty(record).ok())
    }
}

/// Result of [`VoiceCloner::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Where the audio was written, `None` on failure.
    pub audio_path: Option<PathBuf>,
    pub status: String,
}

impl GenerateOutcome {
    fn failed(status: impl Into<String>) -> Self {
        Self {
            audio_path: None,
            status: status.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.audio_path.is_some()
    }
}

/// Result of [`VoiceCloner::delete_selected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub success: bool,
    /// Summaries after the operation.
    pub voices: Vec<String>,
    pub status: String,
}

/// Ties a [`VoiceRegistry`] to a [`VoiceService`].
#[derive(Debug)]
pub struct VoiceCloner<S> {
    config: ClonerConfig,
    registry: VoiceRegistry,
    service: S,
}

impl VoiceCloner<()> {
    /// A cloner for the local operations only (list, delete).
    pub fn local_only(config: ClonerConfig) -> Self {
        Self::new(config, ())
    }
}

impl<S> VoiceCloner<S> {
    pub fn new(config: ClonerConfig, service: S) -> Self {
        let registry = VoiceRegistry::new(config.metadata_path());
        Self {
            config,
            registry,
            service,
        }
    }

    pub fn config(&self) -> &ClonerConfig {
        &self.config
    }

    pub fn registry(&self) -> &VoiceRegistry {
        &self.registry
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Create the output and cloned-voices directories.
    pub fn ensure_dirs(&self) -> Result<(), RegistryError> {
        for dir in [self.config.temp_dir(), self.config.cloned_dir()] {
            std::fs::create_dir_all(dir).map_err(|e| RegistryError::io_error(dir, e))?;
        }
        Ok(())
    }

    /// Current voice summaries.
    pub fn refresh(&self) -> Vec<String> {
        self.registry.list_summaries()
    }

    /// Delete the voice named by `selection` (an index or a summary line).
    ///
    /// A summary line is matched by its voice id, not by its possibly stale index.
    pub fn delete_selected(&self, selection: &str) -> DeleteOutcome {
        let outcome = |success, status: String| DeleteOutcome {
            success,
            voices: self.refresh(),
            status,
        };

        if selection.trim().is_empty() {
            return outcome(false, "No voice selected.".to_string());
        }
        let Some(index) = parse_selection(selection) else {
            return outcome(false, format!("Invalid selection: {selection}"));
        };
        let index = match selection_voice_id(selection) {
            Some(voice_id) => match self.registry.find_by_voice_id(&voice_id) {
                Some((current, _)) => current,
                None => return outcome(false, format!("Voice not found: {voice_id}")),
            },
            None => index,
        };

        let deletion = self.registry.delete_by_index(index);
        if deletion.success {
            info!("{}", deletion.message);
        }
        outcome(deletion.success, deletion.message)
    }
}

impl<S: VoiceService> VoiceCloner<S> {
    /// Clone a voice from `sample` and record it.
    ///
    /// A blank `name` becomes `ClonedVoice_<timestamp>`; `model` falls back to
    /// the configured default.
    pub async fn clone_and_store<P: Progress>(
        &self,
        sample: Option<&Path>,
        name: &str,
        model: Option<ModelId>,
        progress: P,
    ) -> CloneOutcome {
        let Some(sample_path) = sample else {
            return CloneOutcome::failed("No audio sample provided.");
        };
        if !sample_path.exists() {
            return CloneOutcome::failed(format!(
                "Sample file not found: {}",
                sample_path.display()
            ));
        }

        let name = match name.trim() {
            "" => format!("ClonedVoice_{}", Utc::now().format(TIMESTAMP_FORMAT)),
            trimmed => trimmed.to_string(),
        };
        let model = model.unwrap_or_else(|| self.config.default_model.clone());

        progress.report(0.2, "Preparing sample...");
        let voice_id = match VoiceSample::from_path(sample_path) {
            Ok(sample) => self.service.clone_voice(&sample, &name).await,
            Err(e) => Err(e),
        };
        let voice_id = match voice_id {
            Ok(id) => id,
            Err(e) => return CloneOutcome::failed(format!("Cloning failed: {e}")),
        };

        progress.report(0.6, "Voice cloned, saving...");
        let stored_sample = self.copy_sample(sample_path, voice_id.id()).await;

        let record = match self.registry.add(&name, voice_id, model, stored_sample) {
            Ok(record) => record,
            Err(e) => return CloneOutcome::failed(format!("Cloning failed: {e}")),
        };

        progress.report(1.0, "Voice cloned and stored.");
        let status = format!("Voice cloned: {} (ID: {})", record.name, record.voice_id);
        info!("{status}");
        CloneOutcome {
            record: Some(record),
            status,
        }
    }

    /// Synthesize `text` with the voice named by `selection`.
    ///
    /// `model` overrides the model stored with the voice.
    pub async fn generate<P: Progress>(
        &self,
        text: &str,
        selection: &str,
        model: Option<ModelId>,
        settings: VoiceSettings,
        progress: P,
    ) -> GenerateOutcome {
        if selection.trim().is_empty() {
            return GenerateOutcome::failed("No voice selected.");
        }
        let Some((_, record)) = self.registry.resolve_selection(selection) else {
            return GenerateOutcome::failed("Selected voice not found.");
        };
        if text.trim().is_empty() {
            return GenerateOutcome::failed("No text to synthesize.");
        }

        let model = model.unwrap_or_else(|| record.model_id.clone());
        let format = self.config.output_format;
        let request = SynthesisRequest::new(text, record.voice_id.clone(), model)
            .with_settings(settings)
            .with_format(format);

        progress.report(0.3, "Generating audio...");
        let audio = match self.service.synthesize(&request).await {
            Ok(audio) => audio,
            Err(e) => return GenerateOutcome::failed(format!("Generation failed: {e}")),
        };

        let stem = format!("generated_{}", Utc::now().format(OUTPUT_TIMESTAMP_FORMAT));
        let audio_path =
            match write_new_audio(self.config.temp_dir(), &stem, format.extension(), &audio).await {
                Ok(path) => path,
                Err(e) => return GenerateOutcome::failed(format!("Generation failed: {e}")),
            };

        progress.report(1.0, "Generation complete.");
        let status = format!(
            "Generated with voice: {} (ID: {})",
            record.name, record.voice_id
        );
        info!("{status} -> {}", audio_path.display());
        GenerateOutcome {
            audio_path: Some(audio_path),
            status,
        }
    }

    /// Copy the sample next to the metadata document. `None` if the copy failed.
    async fn copy_sample(&self, source: &Path, voice_id: &str) -> Option<PathBuf> {
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .unwrap_or("wav");
        let dir = self.config.cloned_dir();
        let target = absolute(&dir.join(format!("sample_{}.{extension}", sanitize(voice_id))));

        let copied = match tokio::fs::create_dir_all(dir).await {
            Ok(()) => tokio::fs::copy(source, &target).await.map(|_| ()),
            Err(e) => Err(e),
        };
        match copied {
            Ok(()) => Some(target),
            Err(e) => {
                warn!(
                    "Could not copy sample {} to {}: {e}",
                    source.display(),
                    target.display()
                );
                None
            }
        }
    }
}

/// Write `audio` to `dir/<stem>.<ext>` without replacing an existing file;
/// taken names get a `_1`, `_2`, ... suffix.
async fn write_new_audio(
    dir: &Path,
    stem: &str,
    extension: &str,
    audio: &[u8],
) -> std::io::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let mut attempt = 0u32;
    loop {
        let file_name = match attempt {
            0 => format!("{stem}.{extension}"),
            n => format!("{stem}_{n}.{extension}"),
        };
        let path = dir.join(file_name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(mut file) => {
                file.write_all(audio).await?;
                file.flush().await?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Anchor a relative path at the working directory so stored paths survive a `cd`.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Keep identifiers usable as a file name component.
fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
