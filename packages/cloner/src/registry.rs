//! File-backed registry of cloned voices.
//!
//! The registry is a single JSON document holding an ordered array of
//! [`VoiceRecord`]s. Every operation reloads the document and every mutation
//! rewrites it whole, so the file is the only source of truth. Records are
//! addressed by their current position; deleting a record renumbers the ones
//! after it.
//!
//! Two writers interleaving `load`/`save` can lose an update (last write
//! wins on the whole document). The registry is meant for a single local
//! user and does not guard against that.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use voice_cloner_domain::{ModelId, VoiceId};

/// File name of the metadata document inside the cloned-voices directory.
pub const METADATA_FILE_NAME: &str = "voices_metadata.json";

/// One cloned voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRecord {
    /// Display label.
    pub name: String,
    /// Identifier returned by the remote cloning service.
    pub voice_id: VoiceId,
    /// Synthesis model chosen when the voice was cloned.
    pub model_id: ModelId,
    /// Local copy of the original sample, if the copy succeeded.
    #[serde(rename = "sample")]
    pub sample_path: Option<PathBuf>,
    /// Insertion time, UTC.
    pub created_at: DateTime<Utc>,
}

impl VoiceRecord {
    /// `"<index> - <name> (<voice_id>)"`
    pub fn summary(&self, index: usize) -> String {
        format!("{index} - {} ({})", self.name, self.voice_id)
    }
}

/// Errors surfaced by the strict registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// I/O error while reading or writing the metadata document.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The metadata document exists but is not a valid record array.
    #[error("corrupt voice metadata at {}: {source}", .path.display())]
    Corrupt {
        /// The metadata document.
        path: PathBuf,
        /// The parse failure.
        source: serde_json::Error,
    },

    /// Records could not be serialised.
    #[error("failed to serialise voice metadata: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl RegistryError {
    /// Creates a new I/O error with the given path and error.
    pub fn io_error<P: Into<PathBuf>>(path: P, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: error,
        }
    }
}

/// Result of [`VoiceRegistry::delete_by_index`]. Always a value, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub success: bool,
    pub message: String,
}

/// Durable, position-addressed store of [`VoiceRecord`]s.
#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    path: PathBuf,
}

impl VoiceRegistry {
    /// Registry persisted at `path`. Nothing is read or created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the metadata document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, distinguishing a corrupt store from an empty one.
    ///
    /// A missing document is an empty registry.
    pub fn try_load(&self) -> Result<Vec<VoiceRecord>, RegistryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RegistryError::io_error(&self.path, e)),
        };

        serde_json::from_str(&contents).map_err(|e| RegistryError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Read the document; unreadable or corrupt documents count as empty.
    pub fn load(&self) -> Vec<VoiceRecord> {
        self.try_load().unwrap_or_else(|e| {
            warn!("Treating voice registry as empty: {e}");
            Vec::new()
        })
    }

    /// Replace the document with `records`.
    ///
    /// The new content is written to a temporary file next to the document
    /// and renamed over it, so readers see either the old or the new array.
    pub fn save(&self, records: &[VoiceRecord]) -> Result<(), RegistryError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| RegistryError::io_error(dir, e))?;

        let mut json = serde_json::to_vec_pretty(records).map_err(RegistryError::Serialize)?;
        json.push(b'\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RegistryError::io_error(dir, e))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| RegistryError::io_error(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| RegistryError::io_error(&self.path, e.error))?;

        debug!("Saved {} voice record(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Append a record stamped with the current UTC time.
    pub fn add(
        &self,
        name: impl Into<String>,
        voice_id: VoiceId,
        model_id: ModelId,
        sample_path: Option<PathBuf>,
    ) -> Result<VoiceRecord, RegistryError> {
        let mut records = self.load();
        let record = VoiceRecord {
            name: name.into(),
            voice_id,
            model_id,
            sample_path,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// One `"<index> - <name> (<voice_id>)"` line per record, in storage order.
    pub fn list_summaries(&self) -> Vec<String> {
        self.load()
            .iter()
            .enumerate()
            .map(|(index, record)| record.summary(index))
            .collect()
    }

    /// The record at `index`, or `None` when out of range.
    pub fn get_by_index(&self, index: usize) -> Option<VoiceRecord> {
        self.load().into_iter().nth(index)
    }

    /// First record carrying `voice_id`, with its current position.
    pub fn find_by_voice_id(&self, voice_id: &VoiceId) -> Option<(usize, VoiceRecord)> {
        self.load()
            .into_iter()
            .enumerate()
            .find(|(_, record)| &record.voice_id == voice_id)
    }

    /// The record a user selection refers to, with its current position.
    ///
    /// A summary line carrying a `(<voice_id>)` suffix is resolved by that id,
    /// so a line copied before a deletion still names the same voice even
    /// though its position moved. A bare index is resolved by position.
    pub fn resolve_selection(&self, selection: &str) -> Option<(usize, VoiceRecord)> {
        let index = parse_selection(selection)?;
        match selection_voice_id(selection) {
            Some(voice_id) => self.find_by_voice_id(&voice_id),
            None => self.get_by_index(index).map(|record| (index, record)),
        }
    }

    /// Remove the record at `index` and, best effort, its sample copy.
    pub fn delete_by_index(&self, index: usize) -> Deletion {
        let mut records = self.load();
        if index >= records.len() {
            return Deletion {
                success: false,
                message: format!("Invalid index: {index}"),
            };
        }

        let deleted = records.remove(index);
        if let Err(e) = self.save(&records) {
            return Deletion {
                success: false,
                message: format!("Could not delete {}: {e}", deleted.name),
            };
        }

        if let Some(sample) = deleted.sample_path.as_deref().filter(|p| p.exists())
            && let Err(e) = fs::remove_file(sample)
        {
            warn!("Could not remove sample {}: {e}", sample.display());
        }

        Deletion {
            success: true,
            message: format!("Voice deleted: {} (ID: {})", deleted.name, deleted.voice_id),
        }
    }
}

/// Turn a bare index (`"3"`) or a summary line (`"3 - Alice (v1)"`) into an index.
pub fn parse_selection(selection: &str) -> Option<usize> {
    selection.split(" - ").next()?.trim().parse().ok()
}

/// The `(<voice_id>)` suffix of a summary line; `None` for a bare index.
pub fn selection_voice_id(selection: &str) -> Option<VoiceId> {
    let (_, rest) = selection.split_once(" - ")?;
    let (_, id) = rest.trim_end().strip_suffix(')')?.rsplit_once('(')?;
    let id = id.trim();
    (!id.is_empty()).then(|| VoiceId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn registry(dir: &Path) -> VoiceRegistry {
        VoiceRegistry::new(dir.join("cloned_voices").join(METADATA_FILE_NAME))
    }

    #[test]
    fn missing_document_is_empty() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        assert!(registry.try_load().unwrap().is_empty());
        assert!(registry.list_summaries().is_empty());
        assert_eq!(registry.get_by_index(0), None);
    }

    #[test]
    fn corrupt_document_is_strict_error_but_lenient_empty() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        fs::create_dir_all(registry.path().parent().unwrap()).unwrap();
        fs::write(registry.path(), "{ not json").unwrap();

        assert!(matches!(
            registry.try_load(),
            Err(RegistryError::Corrupt { .. })
        ));
        assert!(registry.load().is_empty());
    }

    #[test]
    fn wrong_shape_counts_as_corrupt() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        fs::create_dir_all(registry.path().parent().unwrap()).unwrap();
        fs::write(registry.path(), r#"{"name": "not an array"}"#).unwrap();

        assert!(registry.try_load().is_err());
        assert!(registry.load().is_empty());
    }

    #[test]
    fn save_creates_parent_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        registry.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(registry.path()).unwrap(), "[]\n");
        let entries: Vec<_> = fs::read_dir(registry.path().parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn persisted_field_names() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        registry
            .add("Élodie", VoiceId::new("v1"), ModelId::MultilingualV2, None)
            .unwrap();

        let raw = fs::read_to_string(registry.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value[0];
        assert_eq!(entry["name"], "Élodie");
        assert_eq!(entry["voice_id"], "v1");
        assert_eq!(entry["model_id"], "eleven_multilingual_v2");
        assert!(entry["sample"].is_null());
        assert!(entry["created_at"].as_str().unwrap().ends_with('Z'));
        // non-ASCII stays readable
        assert!(raw.contains("Élodie"));
    }

    #[test]
    fn loads_documents_written_by_earlier_versions() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        fs::create_dir_all(registry.path().parent().unwrap()).unwrap();
        fs::write(
            registry.path(),
            r#"[
  {
    "name": "Ma Cloned Voice",
    "voice_id": "JBFqnCBsd6RMkjVDRZzb",
    "model_id": "eleven_multilingual_v2",
    "sample": "/home/me/cloned_voices/sample_JBFqnCBsd6RMkjVDRZzb.wav",
    "created_at": "2025-03-14T09:26:53.589793Z"
  }
]"#,
        )
        .unwrap();

        let record = registry.get_by_index(0).unwrap();
        assert_eq!(record.name, "Ma Cloned Voice");
        assert_eq!(record.model_id, ModelId::MultilingualV2);
        assert_eq!(
            record.sample_path.as_deref(),
            Some(Path::new(
                "/home/me/cloned_voices/sample_JBFqnCBsd6RMkjVDRZzb.wav"
            ))
        );
        assert_eq!(
            record.created_at.to_rfc3339(),
            "2025-03-14T09:26:53.589793+00:00"
        );
    }

    #[test]
    fn delete_removes_sample_copy() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        let sample = dir.path().join("sample_v1.wav");
        fs::write(&sample, b"RIFF").unwrap();

        registry
            .add("Alice", VoiceId::new("v1"), ModelId::default(), Some(sample.clone()))
            .unwrap();
        let deletion = registry.delete_by_index(0);

        assert!(deletion.success);
        assert_eq!(deletion.message, "Voice deleted: Alice (ID: v1)");
        assert!(!sample.exists());
    }

    #[test]
    fn delete_tolerates_missing_sample() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        registry
            .add(
                "Alice",
                VoiceId::new("v1"),
                ModelId::default(),
                Some(dir.path().join("gone.wav")),
            )
            .unwrap();

        assert!(registry.delete_by_index(0).success);
        assert!(registry.load().is_empty());
    }

    #[test]
    fn find_by_voice_id_reports_position() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        registry
            .add("Alice", VoiceId::new("v1"), ModelId::default(), None)
            .unwrap();
        registry
            .add("Bob", VoiceId::new("v2"), ModelId::default(), None)
            .unwrap();

        let (index, record) = registry.find_by_voice_id(&VoiceId::new("v2")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.name, "Bob");
        assert!(registry.find_by_voice_id(&VoiceId::new("v3")).is_none());
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(parse_selection("0 - Alice (v1)"), Some(0));
        assert_eq!(parse_selection("12 - Some - Name (x)"), Some(12));
        assert_eq!(parse_selection(" 3 "), Some(3));
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection("Alice"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn selection_voice_id_reads_summary_suffix() {
        assert_eq!(selection_voice_id("0 - Alice (v1)"), Some(VoiceId::new("v1")));
        assert_eq!(
            selection_voice_id("2 - Bob (the elder) (JBFqnCBsd6RMkjVDRZzb)"),
            Some(VoiceId::new("JBFqnCBsd6RMkjVDRZzb"))
        );
        assert_eq!(selection_voice_id("3"), None);
        assert_eq!(selection_voice_id("3 - Alice"), None);
        assert_eq!(selection_voice_id("3 - Alice ()"), None);
    }

    #[test]
    fn stale_summary_line_resolves_by_voice_id() {
        let dir = tempdir().unwrap();
        let registry = registry(dir.path());
        for (name, id) in [("Alice", "v1"), ("Bob", "v2"), ("Carol", "v3")] {
            registry
                .add(name, VoiceId::new(id), ModelId::default(), None)
                .unwrap();
        }
        assert!(registry.delete_by_index(0).success);

        let (index, record) = registry.resolve_selection("1 - Bob (v2)").unwrap();
        assert_eq!((index, record.name.as_str()), (0, "Bob"));

        // bare indices follow the current positions
        let (index, record) = registry.resolve_selection("1").unwrap();
        assert_eq!((index, record.name.as_str()), (1, "Carol"));

        assert!(registry.resolve_selection("0 - Alice (v1)").is_none());
        assert!(registry.resolve_selection("7").is_none());
    }
}
