//! Blocking HTTP retrieval of manifest and welcome descriptors

use sectorwatch_host_api::{Fetcher, HostError, HostResult};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("sectorwatch/", env!("CARGO_PKG_VERSION"));

/// Blocking fetcher backed by reqwest.
///
/// One GET per call, no retry. The timeout bounds how long a check can
/// stall the host callback that triggered it.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> HostResult<String> {
        debug!(url = %url, "Fetching descriptor");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| HostError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = %status, "Fetch returned non-success status");
            return Err(HostError::BadStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| HostError::RequestFailed(e.to_string()))?;

        if body.is_empty() {
            return Err(HostError::EmptyBody);
        }

        debug!(url = %url, bytes = body.len(), "Fetch complete");
        Ok(body)
    }
}
