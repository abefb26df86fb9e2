// Application settings - JSON file in the per-user config directory
//
// Every field has a default, so a missing file or a file written by an older
// version still loads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dictionary::ValidationPolicy;
use crate::engine::{FileIo, HexCase, OutputNaming, SystemFileIo};
use crate::paths::{self, NoConfigDir};

/// Error types for settings operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Failed to read or parse the settings file
    #[error("Failed to load settings: {0}")]
    Load(String),
    /// Failed to write the settings file
    #[error("Failed to save settings: {0}")]
    Save(String),
}

/// User settings for the replacement core
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Dictionary file; `None` means `<config dir>/dictionary.json`
    pub dictionary_path: Option<PathBuf>,
    /// Hex digit case produced by the Unicode converter
    pub unicode_case: HexCase,
    /// Checks applied when adding entries
    pub validation: ValidationPolicy,
    /// Output file naming for the file variants
    #[serde(flatten)]
    pub output: OutputNaming,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is missing
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            crate::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Load(e.to_string()))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| SettingsError::Load(format!("{:?}: {}", path, e)))?;

        crate::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the default location
    pub fn load_default() -> Result<Self, SettingsError> {
        let path = paths::get_settings_path().map_err(|e| SettingsError::Load(e.to_string()))?;
        Self::load(&path)
    }

    /// Persist settings to `path` using atomic write (temp file + rename)
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Save(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Save(e.to_string()))?;

        SystemFileIo
            .write(path, content.as_bytes())
            .map_err(|e| SettingsError::Save(format!("Failed to write: {}", e)))
    }

    /// Resolved dictionary file path
    pub fn dictionary_path(&self) -> Result<PathBuf, NoConfigDir> {
        match &self.dictionary_path {
            Some(path) => Ok(path.clone()),
            None => paths::get_dictionary_path(),
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
