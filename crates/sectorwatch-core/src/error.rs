//! Error taxonomy for update checks
//!
//! Every variant is recovered locally: check attempts are independent and
//! no error is fatal to the process.

use sectorwatch_host_api::HostError;
use thiserror::Error;

/// Why an update check produced no comparison
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("No sector file loaded yet")]
    NoSectorLoaded,

    #[error("Could not parse sector label: {label}")]
    LocalUnparseable { label: String },

    #[error("Failed to fetch manifest: {0}")]
    FetchFailed(#[from] HostError),

    #[error("Manifest is missing required fields")]
    ManifestMalformed,
}

pub type CheckResult<T> = Result<T, CheckError>;
