//! Check triggers and outcomes

use serde::{Deserialize, Serialize};

use crate::{LocalSector, RemoteManifest};

/// What initiated an update check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckTrigger {
    /// Fired from the periodic tick: silent except for "update available"
    Periodic,

    /// Explicitly requested by the operator: every outcome is reported
    Manual,
}

impl CheckTrigger {
    /// Whether non-alert outcomes (up to date, errors) are reported
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// Successful result of one update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    /// The remote tuple is strictly newer than the local one
    UpdateAvailable {
        local: LocalSector,
        remote: RemoteManifest,
    },

    /// The local tuple is equal to or newer than the remote one
    UpToDate { local: LocalSector },
}
