//! Update check orchestration and session reminder engine for sectorwatch
//!
//! This crate is the heart of the monitor, containing:
//! - Sector label version extraction
//! - Remote manifest retrieval and ad hoc field parsing
//! - Check orchestration (Idle -> LocalParsed -> RemoteFetched -> Compared)
//! - The connected-session break reminder latch
//! - The one-time welcome notice

mod error;
mod manifest;
mod monitor;
mod session;
mod version;
mod welcome;

pub use error::*;
pub use manifest::*;
pub use monitor::*;
pub use session::*;
pub use version::*;
pub use welcome::*;
