//! Filesystem locations used by azdo-annotator
//!
//! ```text
//! ~/.config/azdo-annotator/
//! └── config.toml               # Integrations and processor options
//! ```
//!
//! `AZDO_ANNOTATOR_CONFIG` overrides the config file path.

use std::path::PathBuf;

/// Application directory name under the user config dir
pub const APP_DIR: &str = "azdo-annotator";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "AZDO_ANNOTATOR_CONFIG";

/// Get the global config directory (`~/.config/azdo-annotator/`)
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the config file path, honoring `AZDO_ANNOTATOR_CONFIG`
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}
