//! String-triggered command surface
//!
//! The host delivers chat input lines verbatim; the monitor consumes the
//! dot-prefixed lines it recognizes and leaves everything else to the host.

use serde::{Deserialize, Serialize};

/// Manual update check
pub const CMD_UPDATE_CHECK: &str = ".sectorwatch-update-check";

/// Open the last advertised download URL
pub const CMD_UPDATE_OPEN: &str = ".sectorwatch-update-open";

/// Print a local/remote version summary
pub const CMD_STATUS: &str = ".sectorwatch-status";

/// Flavor-text greeting
pub const CMD_HEY: &str = ".sectorwatch-hey";

/// Flavor-text coffee delivery
pub const CMD_COFFEE: &str = ".sectorwatch-coffee";

/// Flavor-text mascot notice
pub const CMD_FALCON: &str = ".sectorwatch-falcon";

/// Commands recognized on the host's command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    UpdateCheck,
    OpenDownload,
    Status,
    Hey,
    Coffee,
    Falcon,
}

impl Command {
    /// Parse a raw input line. Returns `None` for anything the monitor
    /// doesn't own, so the host can route the line elsewhere.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            CMD_UPDATE_CHECK => Some(Self::UpdateCheck),
            CMD_UPDATE_OPEN => Some(Self::OpenDownload),
            CMD_STATUS => Some(Self::Status),
            CMD_HEY => Some(Self::Hey),
            CMD_COFFEE => Some(Self::Coffee),
            CMD_FALCON => Some(Self::Falcon),
            _ => None,
        }
    }

    /// The input line that triggers this command
    pub fn as_line(&self) -> &'static str {
        match self {
            Self::UpdateCheck => CMD_UPDATE_CHECK,
            Self::OpenDownload => CMD_UPDATE_OPEN,
            Self::Status => CMD_STATUS,
            Self::Hey => CMD_HEY,
            Self::Coffee => CMD_COFFEE,
            Self::Falcon => CMD_FALCON,
        }
    }
}
