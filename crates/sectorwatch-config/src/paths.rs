//! Default config path
//!
//! User-writable, no root required:
//! `$SECTORWATCH_CONFIG` > `$XDG_CONFIG_HOME/sectorwatch/config.toml` >
//! `~/.config/sectorwatch/config.toml`.

use std::path::PathBuf;

/// Environment variable for overriding the config path
pub const SECTORWATCH_CONFIG_ENV: &str = "SECTORWATCH_CONFIG";

/// Application subdirectory name
const APP_DIR: &str = "sectorwatch";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$SECTORWATCH_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/sectorwatch/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/sectorwatch/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(SECTORWATCH_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the config path without checking SECTORWATCH_CONFIG.
/// Used for help text where the env var is described separately.
pub fn config_path_without_env() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join(CONFIG_FILENAME)
}
