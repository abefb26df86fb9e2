//! textswap: find/replace dictionary engine.
//!
//! The crate is the core behind a desktop text-replacement tool:
//! - `dictionary`: ordered find→replace entries with optional JSON file backing
//! - `engine`: forward/reverse replacement, Unicode escaping, file processing
//! - `commands`: the narrow interface the GUI shell calls into
//! - `settings` / `paths`: per-user configuration

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod commands;
pub mod dictionary;
pub mod engine;
pub mod paths;
pub mod settings;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use dictionary::{DictionaryEntry, DictionaryError, DictionaryStore, ValidationPolicy};
pub use engine::{EngineError, FileIo, HexCase, SystemFileIo};
pub use settings::{Settings, SettingsError};

/// Install the `env_logger` backend.
///
/// Defaults to `debug` in debug builds and `info` in release builds; `RUST_LOG`
/// overrides both. Calling this more than once is harmless.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn init_logging() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
