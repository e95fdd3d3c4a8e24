//! Console host for the standalone CLI runner
//!
//! Stands in for the simulation client's notification surface: routine
//! messages go to stdout, alerts get a framed banner in place of the OS
//! modal dialog.

use sectorwatch_host_api::{HostAdapter, HostError, HostResult};
use tracing::info;

/// Host adapter backed by the terminal.
///
/// The sector label and connection signal are fixed at construction; the
/// CLI passes them from its arguments.
pub struct ConsoleHost {
    sector_label: Option<String>,
    connected: bool,
}

impl ConsoleHost {
    pub fn new(sector_label: Option<String>, connected: bool) -> Self {
        Self {
            sector_label,
            connected,
        }
    }
}

impl HostAdapter for ConsoleHost {
    fn sector_label(&self) -> Option<String> {
        self.sector_label
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(String::from)
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn show_message(&self, sender: &str, text: &str) {
        info!(sender = %sender, "Message shown");
        println!("[{}] {}", sender, text);
    }

    fn show_alert(&self, title: &str, text: &str) {
        info!(title = %title, "Alert shown");
        let width = title.len().max(text.lines().map(str::len).max().unwrap_or(0)) + 4;
        println!("{}", "=".repeat(width));
        println!("  {}", title);
        println!("{}", "-".repeat(width));
        for line in text.lines() {
            println!("  {}", line);
        }
        println!("{}", "=".repeat(width));
    }

    fn open_url(&self, url: &str) -> HostResult<()> {
        info!(url = %url, "Opening URL in default handler");
        open::that(url).map_err(|e| HostError::OpenFailed(e.to_string()))
    }
}
