// Dictionary store - ordered find/replace entries with optional file-based persistence
//
// Entry order is match precedence: the engine applies entries first to last.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::validation::ValidationPolicy;
use crate::engine::{FileIo, SystemFileIo};

/// A single find/replace rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Unique identifier for the entry
    pub id: String,
    /// Text to search for (never empty)
    pub find: String,
    /// Text substituted for each occurrence of `find` (may be empty)
    pub replace: String,
    /// RFC 3339 creation time; absent in files written before it existed
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl DictionaryEntry {
    /// Build a fresh entry with a generated ID and the current timestamp
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            find: find.into(),
            replace: replace.into(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Entry rejected by validation (empty find, policy violation, bad batch line)
    #[error("Invalid entry: {reason}")]
    Validation { reason: String },
    /// Positional delete outside the current entries
    #[error("Index {index} is out of range for a dictionary of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    /// Entry not found
    #[error("Entry with ID {0} not found")]
    NotFound(String),
    /// Failed to persist entries
    #[error("Failed to persist entries: {0}")]
    PersistenceError(String),
    /// Failed to load entries
    #[error("Failed to load entries: {0}")]
    LoadError(String),
}

/// Ordered store of dictionary entries
///
/// Without a backing file the store lives for the session only. With one, every
/// mutation is written through and rolled back if the write fails. A file-backed
/// store that was never loaded reads its file before the first mutation, so a
/// write never replaces entries it has not seen.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    /// Entries in match-precedence order
    entries: Vec<DictionaryEntry>,
    /// Path to persistence file
    config_path: Option<PathBuf>,
    /// Extra checks applied to new entries
    policy: ValidationPolicy,
    /// Whether `entries` reflects the backing file
    loaded: bool,
}

impl DictionaryStore {
    /// Create an empty in-memory store
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create an empty store persisted to `config_path`
    ///
    /// Nothing is read until [`DictionaryStore::load`] is called or the first
    /// mutation loads it.
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            entries: Vec::new(),
            config_path: Some(config_path),
            policy: ValidationPolicy::default(),
            loaded: false,
        }
    }

    /// Open the configured dictionary file with the configured validation policy
    pub fn from_settings(settings: &crate::Settings) -> Result<Self, DictionaryError> {
        let config_path = settings.dictionary_path().map_err(|e| {
            DictionaryError::LoadError(format!("Could not determine config directory: {}", e))
        })?;
        let mut store = Self::new(config_path).with_policy(settings.validation.clone());
        store.load()?;
        Ok(store)
    }

    /// Replace the validation policy
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Path of the backing file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load entries from the persistence file
    ///
    /// A missing or empty file yields an empty dictionary.
    pub fn load(&mut self) -> Result<(), DictionaryError> {
        let Some(path) = self.config_path.as_deref() else {
            crate::debug!("In-memory dictionary, nothing to load");
            self.loaded = true;
            return Ok(());
        };
        self.entries = read_entries(path)?;
        self.loaded = true;
        crate::info!("Loaded {} dictionary entries", self.entries.len());
        Ok(())
    }

    fn ensure_loaded(&mut self) -> Result<(), DictionaryError> {
        if self.loaded {
            return Ok(());
        }
        self.load()
    }

    /// Switch to another dictionary file and load it
    ///
    /// On failure the store keeps its previous file and entries.
    pub fn open(&mut self, path: PathBuf) -> Result<(), DictionaryError> {
        let entries = read_entries(&path)?;
        crate::info!(
            "Switched dictionary to {:?} ({} entries)",
            path,
            entries.len()
        );
        self.entries = entries;
        self.config_path = Some(path);
        self.loaded = true;
        Ok(())
    }

    /// Persist entries to the file using atomic write (temp file + rename)
    fn save(&self) -> Result<(), DictionaryError> {
        let Some(config_path) = self.config_path.as_deref() else {
            return Ok(());
        };
        crate::debug!(
            "Persisting {} dictionary entries to {:?}",
            self.entries.len(),
            config_path
        );

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;

        SystemFileIo
            .write(config_path, content.as_bytes())
            .map_err(|e| DictionaryError::PersistenceError(format!("Failed to write: {}", e)))?;

        crate::debug!("Dictionary entries persisted successfully");
        Ok(())
    }

    /// Persist, restoring `previous` in memory if the write fails
    fn commit(&mut self, previous: Vec<DictionaryEntry>) -> Result<(), DictionaryError> {
        if let Err(e) = self.save() {
            crate::warn!("Rolling back dictionary change: {}", e);
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    /// All entries in match-precedence order
    pub fn list(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by position
    pub fn get(&self, index: usize) -> Option<&DictionaryEntry> {
        self.entries.get(index)
    }

    /// Append a new entry
    #[must_use = "this returns a Result that should be handled"]
    pub fn add(
        &mut self,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Result<DictionaryEntry, DictionaryError> {
        self.ensure_loaded()?;
        let (find, replace) = (find.into(), replace.into());
        self.policy.check(&find, &replace, &self.entries)?;

        let entry = DictionaryEntry::new(find, replace);
        let previous = self.entries.clone();
        self.entries.push(entry.clone());
        self.commit(previous)?;
        Ok(entry)
    }

    /// Append several entries in order, or none of them
    ///
    /// Each pair is validated against the existing entries and the pairs before
    /// it in the batch. The first invalid pair rejects the whole batch.
    #[must_use = "this returns a Result that should be handled"]
    pub fn batch_add<I, F, R>(&mut self, pairs: I) -> Result<Vec<DictionaryEntry>, DictionaryError>
    where
        I: IntoIterator<Item = (F, R)>,
        F: Into<String>,
        R: Into<String>,
    {
        self.ensure_loaded()?;
        let mut staged = self.entries.clone();
        let start = staged.len();

        for (position, (find, replace)) in pairs.into_iter().enumerate() {
            let (find, replace) = (find.into(), replace.into());
            self.policy
                .check(&find, &replace, &staged)
                .map_err(|e| match e {
                    DictionaryError::Validation { reason } => DictionaryError::Validation {
                        reason: format!("batch item {}: {}", position + 1, reason),
                    },
                    other => other,
                })?;
            staged.push(DictionaryEntry::new(find, replace));
        }

        let added = staged[start..].to_vec();
        let previous = std::mem::replace(&mut self.entries, staged);
        self.commit(previous)?;
        crate::debug!("Batch added {} dictionary entries", added.len());
        Ok(added)
    }

    /// Remove the entry at `index`
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete(&mut self, index: usize) -> Result<DictionaryEntry, DictionaryError> {
        self.ensure_loaded()?;
        if index >= self.entries.len() {
            return Err(DictionaryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let previous = self.entries.clone();
        let removed = self.entries.remove(index);
        self.commit(previous)?;
        Ok(removed)
    }

    /// Remove the entry with the given ID
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete_by_id(&mut self, id: &str) -> Result<DictionaryEntry, DictionaryError> {
        self.ensure_loaded()?;
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DictionaryError::NotFound(id.to_string()))?;
        self.delete(index)
    }
}

fn read_entries(path: &Path) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    crate::debug!("Loading dictionary from {:?}", path);

    if !path.exists() {
        crate::debug!("No dictionary file found, starting with empty store");
        return Ok(Vec::new());
    }

    let content =
        fs::read_to_string(path).map_err(|e| DictionaryError::LoadError(e.to_string()))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| DictionaryError::LoadError(e.to_string()))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
