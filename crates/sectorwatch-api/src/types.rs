//! Version and manifest types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sector package version tuple: AIRAC cycle, revision within the cycle,
/// and package patch number.
///
/// Field order matters: the derived `Ord` gives the lexicographic
/// (cycle, revision, patch) ordering used for update decisions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectorVersion {
    pub cycle: u32,
    pub revision: u32,
    pub patch: u32,
}

impl SectorVersion {
    pub fn new(cycle: u32, revision: u32, patch: u32) -> Self {
        Self {
            cycle,
            revision,
            patch,
        }
    }
}

impl fmt::Display for SectorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AIRAC {}/{} (Package {})",
            self.cycle, self.revision, self.patch
        )
    }
}

/// Version information extracted from the currently loaded sector file label.
///
/// Only produced from a successful label match; a label that doesn't match
/// the expected pattern yields no `LocalSector` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSector {
    pub version: SectorVersion,

    /// The full label string the version was extracted from
    pub raw_label: String,
}

/// The remote manifest advertising the latest published sector package.
///
/// Cycle and revision are required on the wire; patch defaults to 0 and the
/// string fields default to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteManifest {
    pub version: SectorVersion,
    pub package_name: String,
    pub download_url: String,
    pub notes: String,
}

/// One-time welcome notice fetched from the welcome descriptor URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeNotice {
    pub title: String,
    pub message: String,
}

/// Snapshot of local and remote version state for the status command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    /// The raw sector label as reported by the host, if any
    pub sector_label: Option<String>,

    /// Parsed local version, if the label matched
    pub local: Option<SectorVersion>,

    /// Remote manifest, if the fetch and parse succeeded
    pub remote: Option<RemoteManifest>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Local] Sector string: {} ",
            self.sector_label.as_deref().unwrap_or("<none>")
        )?;
        match &self.local {
            Some(version) => write!(f, "{}. ", version)?,
            None => write!(f, "Could not parse sector label. ")?,
        }
        write!(f, "[Remote]")?;
        match &self.remote {
            Some(manifest) => write!(
                f,
                " {} Name: {}",
                manifest.version,
                if manifest.package_name.is_empty() {
                    "<none>"
                } else {
                    &manifest.package_name
                }
            ),
            None => write!(f, " <fetch/parse failed>"),
        }
    }
}
