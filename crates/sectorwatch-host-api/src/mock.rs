//! Mock host adapter and fetcher for testing

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Fetcher, HostAdapter, HostError, HostResult};

/// Mock host adapter for unit/integration testing.
///
/// The sector label and connection signal are scripted by the test; every
/// notification and opened URL is recorded for assertions.
#[derive(Default)]
pub struct MockHost {
    sector_label: Mutex<Option<String>>,
    connected: Mutex<bool>,
    messages: Mutex<Vec<(String, String)>>,
    alerts: Mutex<Vec<(String, String)>>,
    opened_urls: Mutex<Vec<String>>,

    /// Configure open_url to fail
    pub fail_open: Mutex<bool>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sector_label(&self, label: Option<&str>) {
        *self.sector_label.lock().unwrap() = label.map(String::from);
    }

    pub fn set_connected(&self, connected: bool) {
        *self.connected.lock().unwrap() = connected;
    }

    /// Recorded (sender, text) pairs from `show_message`
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Recorded (title, text) pairs from `show_alert`
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened_urls.lock().unwrap().clone()
    }

    pub fn clear_notifications(&self) {
        self.messages.lock().unwrap().clear();
        self.alerts.lock().unwrap().clear();
    }
}

impl HostAdapter for MockHost {
    fn sector_label(&self) -> Option<String> {
        self.sector_label.lock().unwrap().clone()
    }

    fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }

    fn show_message(&self, sender: &str, text: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((sender.to_string(), text.to_string()));
    }

    fn show_alert(&self, title: &str, text: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), text.to_string()));
    }

    fn open_url(&self, url: &str) -> HostResult<()> {
        if *self.fail_open.lock().unwrap() {
            return Err(HostError::OpenFailed("mock failure".into()));
        }
        self.opened_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Mock fetcher returning scripted bodies per URL.
///
/// Unscripted URLs fail the same way an unreachable host would.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, String>>,
    failures: Mutex<HashMap<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful body for a URL
    pub fn set_response(&self, url: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
        self.failures.lock().unwrap().remove(url);
    }

    /// Script an HTTP error status for a URL
    pub fn set_status(&self, url: &str, status: u16) {
        self.failures
            .lock()
            .unwrap()
            .insert(url.to_string(), status);
        self.responses.lock().unwrap().remove(url);
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

impl Fetcher for MockFetcher {
    fn fetch_text(&self, url: &str) -> HostResult<String> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(status) = self.failures.lock().unwrap().get(url) {
            return Err(HostError::BadStatus(*status));
        }

        match self.responses.lock().unwrap().get(url) {
            Some(body) if body.is_empty() => Err(HostError::EmptyBody),
            Some(body) => Ok(body.clone()),
            None => Err(HostError::RequestFailed(format!("no route to {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_host_records_notifications() {
        let host = MockHost::new();
        host.show_message("sectorwatch", "hello");
        host.show_alert("sectorwatch", "update!");

        assert_eq!(host.messages(), vec![("sectorwatch".into(), "hello".into())]);
        assert_eq!(host.alerts(), vec![("sectorwatch".into(), "update!".into())]);
    }

    #[test]
    fn mock_host_scripted_state() {
        let host = MockHost::new();
        assert_eq!(host.sector_label(), None);
        assert!(!host.is_connected());

        host.set_sector_label(Some("LBSR 2510/2 LBSR 20251013"));
        host.set_connected(true);

        assert_eq!(
            host.sector_label().as_deref(),
            Some("LBSR 2510/2 LBSR 20251013")
        );
        assert!(host.is_connected());
    }

    #[test]
    fn mock_host_open_failure() {
        let host = MockHost::new();
        *host.fail_open.lock().unwrap() = true;

        assert!(host.open_url("https://example.com").is_err());
        assert!(host.opened_urls().is_empty());
    }

    #[test]
    fn mock_fetcher_scripted_responses() {
        let fetcher = MockFetcher::new();
        fetcher.set_response("https://example.com/a", "body");
        fetcher.set_status("https://example.com/b", 404);

        assert_eq!(fetcher.fetch_text("https://example.com/a").unwrap(), "body");
        assert!(matches!(
            fetcher.fetch_text("https://example.com/b"),
            Err(HostError::BadStatus(404))
        ));
        assert!(matches!(
            fetcher.fetch_text("https://example.com/c"),
            Err(HostError::RequestFailed(_))
        ));

        assert_eq!(fetcher.requests().len(), 3);
        assert_eq!(fetcher.request_count("https://example.com/a"), 1);
    }

    #[test]
    fn mock_fetcher_empty_body_is_an_error() {
        let fetcher = MockFetcher::new();
        fetcher.set_response("https://example.com/empty", "");

        assert!(matches!(
            fetcher.fetch_text("https://example.com/empty"),
            Err(HostError::EmptyBody)
        ));
    }
}
