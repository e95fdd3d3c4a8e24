//! Host adapter traits

use thiserror::Error;

/// Errors from host adapter operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected HTTP status: {0}")]
    BadStatus(u16),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Failed to open URL: {0}")]
    OpenFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;

/// Interface to the hosting environment.
///
/// All methods are synchronous: the host delivers callbacks one at a time
/// and guarantees they are never re-entrant or concurrent, so the monitor
/// does its work inline and returns.
pub trait HostAdapter: Send + Sync {
    /// Label string of the currently loaded sector data package, if any.
    /// An empty label is reported as `None`.
    fn sector_label(&self) -> Option<String>;

    /// Whether the operator is currently connected to the network
    fn is_connected(&self) -> bool;

    /// Routine, non-blocking message in the host's log/chat surface
    fn show_message(&self, sender: &str, text: &str);

    /// Attention-demanding notice: acknowledgable chat message plus a
    /// blocking OS-level modal dialog
    fn show_alert(&self, title: &str, text: &str);

    /// Open a URL in the operator's default handler
    fn open_url(&self, url: &str) -> HostResult<()>;
}

/// Blocking retrieval of small text documents.
///
/// One plain GET, no retry, no caching. The implementation is expected to
/// enforce a request timeout so a stalled fetch can't wedge the host's
/// callback for long.
pub trait Fetcher: Send + Sync {
    fn fetch_text(&self, url: &str) -> HostResult<String>;
}
