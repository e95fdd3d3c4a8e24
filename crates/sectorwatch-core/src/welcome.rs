//! One-time welcome notice

use sectorwatch_api::WelcomeNotice;
use sectorwatch_host_api::Fetcher;
use tracing::debug;

use crate::manifest::string_field;

/// Fetch and parse the welcome descriptor.
///
/// Returns `None` on any fetch or parse failure, and also when both fields
/// are empty: there is nothing to show and failures are always silent.
pub fn fetch_welcome(fetcher: &dyn Fetcher, url: &str) -> Option<WelcomeNotice> {
    let body = match fetcher.fetch_text(url) {
        Ok(body) => body,
        Err(e) => {
            debug!(url = %url, error = %e, "Welcome fetch failed, staying silent");
            return None;
        }
    };

    parse_welcome(&body)
}

/// Extract title/message from a welcome descriptor body
pub fn parse_welcome(body: &str) -> Option<WelcomeNotice> {
    let title = string_field(body, "title").unwrap_or_default();
    let message = string_field(body, "message").unwrap_or_default();

    if title.is_empty() && message.is_empty() {
        return None;
    }

    Some(WelcomeNotice { title, message })
}

/// Combined display text, with stock fallbacks for the missing half
pub fn welcome_text(notice: &WelcomeNotice, plugin_name: &str) -> String {
    let title = if notice.title.is_empty() {
        plugin_name
    } else {
        &notice.title
    };
    let message = if notice.message.is_empty() {
        "Welcome!"
    } else {
        &notice.message
    };

    format!("{} {}", title, message)
}
