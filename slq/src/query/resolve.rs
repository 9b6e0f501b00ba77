//! Station resolution.
//!
//! Users name a station either by its numeric site id or by (part of) its
//! name. Ids pass straight through; names are matched against the full
//! site listing.

use std::future::Future;

use tracing::debug;

use crate::domain::{SiteId, Station, contains_case_insensitive};

use super::error::QueryError;

/// Resolve a station name or id to a site id.
///
/// Input that is entirely decimal digits is returned as-is without calling
/// `fetch_sites`. Anything else triggers exactly one `fetch_sites` call,
/// and the first station in listing order whose name contains the input
/// (ignoring case) wins. Listing order is the provider's; it is not
/// re-sorted here.
///
/// Fails with [`QueryError::StationNotFound`] when nothing matches, or when
/// the first match carries the reserved id 0.
pub async fn resolve_station<F, Fut>(input: &str, fetch_sites: F) -> Result<SiteId, QueryError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Station>, QueryError>>,
{
    if let Some(id) = SiteId::parse(input) {
        debug!(%id, "station given as site id");
        return Ok(id);
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        debug!(query = input, "site id out of range");
        return Err(QueryError::StationNotFound(input.to_string()));
    }

    let sites = fetch_sites().await?;

    let found = sites
        .iter()
        .find(|s| contains_case_insensitive(&s.name, input))
        .filter(|s| !s.id.is_zero());

    match found {
        Some(station) => {
            debug!(query = input, name = %station.name, id = %station.id, "resolved station");
            Ok(station.id)
        }
        None => Err(QueryError::StationNotFound(input.to_string())),
    }
}

/// All stations whose name contains `query`, ignoring case, in listing order.
pub fn matching_stations(mut sites: Vec<Station>, query: &str) -> Vec<Station> {
    sites.retain(|s| contains_case_insensitive(&s.name, query));
    sites
}
