//! Mock transport for testing without API access.
//!
//! Serves canned responses keyed by URL, either registered in code or
//! loaded from a directory of JSON files, and records every request so
//! tests can assert how many fetches a query made.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::domain::SiteId;

use super::config::SlConfig;
use super::error::FetchError;
use super::transport::{RawResponse, Transport};

/// File holding the site listing in a mock data directory.
const SITES_FILE: &str = "sites.json";

/// Transport that answers from a fixed URL → response table.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: HashMap<String, RawResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a mock with no routes; every fetch fails with `NoRoute`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with the given response.
    pub fn with_response(mut self, url: impl Into<String>, response: RawResponse) -> Self {
        self.routes.insert(url.into(), response);
        self
    }

    /// Answer the sites endpoint of `config` with `body`.
    pub fn with_sites(self, config: &SlConfig, body: impl Into<Vec<u8>>) -> Self {
        self.with_response(config.sites_url(), RawResponse::ok(body))
    }

    /// Answer the departures endpoint for `site` with `body`.
    pub fn with_departures(
        self,
        config: &SlConfig,
        site: SiteId,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.with_response(config.departures_url(site), RawResponse::ok(body))
    }

    /// Load responses from a directory.
    ///
    /// Expects `sites.json` for the site listing and `{site id}.json`
    /// (e.g. `9001.json`) for departure boards. Other files are ignored.
    pub fn from_dir(dir: impl AsRef<Path>, config: &SlConfig) -> Result<Self, FetchError> {
        let dir = dir.as_ref();
        let mut mock = Self::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
            let url = if file_name == SITES_FILE {
                config.sites_url()
            } else {
                match path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(SiteId::parse)
                {
                    Some(site) => config.departures_url(site),
                    None => continue,
                }
            };

            let body = std::fs::read(&path)?;
            debug!(file = %path.display(), %url, "loaded mock response");
            mock = mock.with_response(url, RawResponse::ok(body));
        }

        Ok(mock)
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NoRoute(url.to_string()))
    }
}
