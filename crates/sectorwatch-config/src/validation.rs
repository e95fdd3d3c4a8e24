//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("'{field}' must not be empty")]
    EmptyUrl { field: String },

    #[error("'{field}' must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: String, value: String },

    #[error("'{field}' must be greater than zero")]
    ZeroInterval { field: String },
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_url(&config.manifest.url, "manifest.url", &mut errors);
    validate_url(&config.manifest.welcome_url, "manifest.welcome_url", &mut errors);

    validate_interval(
        config.check.interval_seconds,
        "check.interval_seconds",
        &mut errors,
    );
    validate_interval(
        config.check.timeout_seconds,
        "check.timeout_seconds",
        &mut errors,
    );
    validate_interval(
        config.reminder.interval_minutes,
        "reminder.interval_minutes",
        &mut errors,
    );

    errors
}

fn validate_url(url: &Option<String>, field: &str, errors: &mut Vec<ValidationError>) {
    let Some(url) = url else { return };

    if url.is_empty() {
        errors.push(ValidationError::EmptyUrl {
            field: field.to_string(),
        });
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(ValidationError::InvalidUrl {
            field: field.to_string(),
            value: url.clone(),
        });
    }
}

fn validate_interval(value: Option<u64>, field: &str, errors: &mut Vec<ValidationError>) {
    if value == Some(0) {
        errors.push(ValidationError::ZeroInterval {
            field: field.to_string(),
        });
    }
}
