//! SL (Storstockholms Lokaltrafik) API access.
//!
//! This module covers the provider boundary:
//! - endpoint configuration ([`SlConfig`])
//! - fetching raw responses through a [`Transport`]
//! - decoding and normalizing the JSON payloads into domain types
//!
//! Two endpoints are used: the full site listing (a JSON array of site
//! objects) and the per-site departures board (an object with a
//! `departures` array). Times in departures are local Stockholm time.

mod config;
mod error;
mod mock;
mod normalize;
mod transport;

pub use config::{BASE_URL_ENV, SlConfig, TIMEOUT_ENV};
pub use error::{FetchError, FormatError};
pub use mock::MockTransport;
pub use normalize::{decode, normalize_departures, normalize_stations};
pub use transport::{HttpTransport, RawResponse, Transport};
