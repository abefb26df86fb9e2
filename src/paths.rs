//! Per-user data locations.

use std::path::PathBuf;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "TEXTSWAP_CONFIG_DIR";

/// Application directory name under the platform config directory
const APP_DIR_NAME: &str = "textswap";

/// Error returned when no config directory can be determined
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not determine the user config directory")]
pub struct NoConfigDir;

/// Directory holding `settings.json` and the default `dictionary.json`
///
/// `$TEXTSWAP_CONFIG_DIR` wins when set and non-empty; otherwise the platform
/// config directory joined with `textswap`.
pub fn get_config_dir() -> Result<PathBuf, NoConfigDir> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(NoConfigDir)
}

/// Default settings file location
pub fn get_settings_path() -> Result<PathBuf, NoConfigDir> {
    Ok(get_config_dir()?.join("settings.json"))
}

/// Default dictionary file location
pub fn get_dictionary_path() -> Result<PathBuf, NoConfigDir> {
    Ok(get_config_dir()?.join("dictionary.json"))
}
