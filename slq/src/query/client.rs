//! Query orchestration.
//!
//! [`SlClient`] ties the pieces together for the two user-facing queries:
//! station search and departures. Each query is a short sequence of
//! fetches (at most a site listing, then one departures board), run one
//! after the other.

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{Departure, SiteId, Station, TransportPatterns};
use crate::sl::{
    FetchError, HttpTransport, SlConfig, Transport, decode, normalize_departures,
    normalize_stations,
};

use super::error::QueryError;
use super::filter::DepartureFilter;
use super::resolve::{matching_stations, resolve_station};

/// Client for SL station and departure queries.
///
/// Generic over the [`Transport`] so it can run against the live API or
/// canned responses.
#[derive(Debug, Clone)]
pub struct SlClient<T> {
    transport: T,
    config: SlConfig,
    patterns: TransportPatterns,
}

impl SlClient<HttpTransport> {
    /// Create a client that talks to the live API.
    pub fn http(config: SlConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> SlClient<T> {
    /// Create a client using the default SL transport vocabulary.
    pub fn new(transport: T, config: SlConfig) -> Self {
        Self {
            transport,
            config,
            patterns: TransportPatterns::default(),
        }
    }

    /// Use a custom transport-type vocabulary.
    pub fn with_patterns(mut self, patterns: TransportPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn config(&self) -> &SlConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a URL and decode its body, treating non-2xx as failure.
    async fn fetch_json(&self, url: &str) -> Result<Value, QueryError> {
        let response = self.transport.fetch(url).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                url: url.to_string(),
            }
            .into());
        }

        Ok(decode(&response.body)?)
    }

    /// Fetch the full site listing.
    pub async fn fetch_sites(&self) -> Result<Vec<Station>, QueryError> {
        let raw = self.fetch_json(&self.config.sites_url()).await?;
        Ok(normalize_stations(&raw)?)
    }

    /// Fetch the unfiltered departures board for a site.
    pub async fn fetch_departures(&self, site: SiteId) -> Result<Vec<Departure>, QueryError> {
        let raw = self.fetch_json(&self.config.departures_url(site)).await?;
        Ok(normalize_departures(&raw)?)
    }

    /// Resolve a station name or numeric id to a site id.
    ///
    /// Numeric input never touches the network.
    pub async fn resolve(&self, station: &str) -> Result<SiteId, QueryError> {
        resolve_station(station, || self.fetch_sites()).await
    }

    /// All stations whose name contains `query`, ignoring case.
    pub async fn search_stations(&self, query: &str) -> Result<Vec<Station>, QueryError> {
        let sites = self.fetch_sites().await?;
        let found = matching_stations(sites, query);

        info!(query, matches = found.len(), "station search");
        Ok(found)
    }

    /// Upcoming departures from `station`, narrowed by `filter`.
    ///
    /// Returns the full filtered list in provider order; truncating it to a
    /// display count is up to the caller. An empty list is a successful
    /// answer, distinct from [`QueryError::StationNotFound`].
    pub async fn get_departures(
        &self,
        station: &str,
        filter: &DepartureFilter,
    ) -> Result<Vec<Departure>, QueryError> {
        let site = self.resolve(station).await?;
        let mut departures = self.fetch_departures(site).await?;

        debug!(%site, total = departures.len(), "fetched departures");
        filter.apply(&mut departures, &self.patterns);

        info!(station, %site, matches = departures.len(), "departures query");
        Ok(departures)
    }
}
