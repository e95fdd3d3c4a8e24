//! Raw configuration schema (as parsed from TOML) and the validated config

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default manifest URL baked into the build
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/sectorwatch/data/main/version.json";

/// Default welcome descriptor URL baked into the build
pub const DEFAULT_WELCOME_URL: &str =
    "https://raw.githubusercontent.com/sectorwatch/data/main/welcome.json";

/// Default periodic check interval in seconds
pub const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 5;

/// Default fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;

/// Default break reminder interval in minutes
pub const DEFAULT_REMINDER_INTERVAL_MINUTES: u64 = 120;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Manifest locations
    #[serde(default)]
    pub manifest: RawManifestConfig,

    /// Update check settings
    #[serde(default)]
    pub check: RawCheckConfig,

    /// Break reminder settings
    #[serde(default)]
    pub reminder: RawReminderConfig,
}

/// Manifest location settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawManifestConfig {
    /// Version manifest URL
    pub url: Option<String>,

    /// Welcome descriptor URL
    pub welcome_url: Option<String>,
}

/// Update check settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCheckConfig {
    /// Seconds between periodic checks
    pub interval_seconds: Option<u64>,

    /// Per-request fetch timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Break reminder settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawReminderConfig {
    /// Minutes of connected time between break reminders
    pub interval_minutes: Option<u64>,
}

/// Validated configuration ready for use by the monitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub manifest_url: String,
    pub welcome_url: String,
    pub check_interval: Duration,
    pub fetch_timeout: Duration,
    pub reminder_interval: Duration,
}

impl MonitorConfig {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            manifest_url: raw
                .manifest
                .url
                .unwrap_or_else(|| DEFAULT_MANIFEST_URL.to_string()),
            welcome_url: raw
                .manifest
                .welcome_url
                .unwrap_or_else(|| DEFAULT_WELCOME_URL.to_string()),
            check_interval: Duration::from_secs(
                raw.check
                    .interval_seconds
                    .unwrap_or(DEFAULT_CHECK_INTERVAL_SECONDS),
            ),
            fetch_timeout: Duration::from_secs(
                raw.check
                    .timeout_seconds
                    .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECONDS),
            ),
            reminder_interval: Duration::from_secs(
                raw.reminder
                    .interval_minutes
                    .unwrap_or(DEFAULT_REMINDER_INTERVAL_MINUTES)
                    * 60,
            ),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            welcome_url: DEFAULT_WELCOME_URL.to_string(),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECONDS),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECONDS),
            reminder_interval: Duration::from_secs(DEFAULT_REMINDER_INTERVAL_MINUTES * 60),
        }
    }
}
