//! Configuration for the SL API endpoints.

use std::time::Duration;

use tracing::warn;

use crate::domain::SiteId;

/// Default base URL for the SL transport API.
const DEFAULT_BASE_URL: &str = "https://transport.integration.sl.se/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SLQ_BASE_URL";

/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "SLQ_TIMEOUT_SECS";

/// Configuration for talking to the SL API.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl SlConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("slq/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Build a config from `SLQ_BASE_URL` and `SLQ_TIMEOUT_SECS`.
    ///
    /// Unset variables keep their defaults; an unparsable timeout is
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(secs),
                _ => warn!(
                    value = %raw,
                    default = DEFAULT_TIMEOUT_SECS,
                    "ignoring invalid {TIMEOUT_ENV}"
                ),
            }
        }

        config
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Returns the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the full site listing.
    pub fn sites_url(&self) -> String {
        format!("{}/sites?expand=true", self.base_url)
    }

    /// URL of the departures board for one site.
    pub fn departures_url(&self, site: SiteId) -> String {
        format!("{}/sites/{}/departures", self.base_url, site)
    }
}

impl Default for SlConfig {
    fn default() -> Self {
        Self::new()
    }
}
