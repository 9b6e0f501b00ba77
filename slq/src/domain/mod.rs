//! Domain types for SL departure queries.
//!
//! Stations, departures and the matching rules applied to them. Values are
//! built from provider data by `sl::normalize_*` and never mutated after
//! construction; filtering only keeps or drops them.

mod departure;
mod station;
mod text;
mod time;
mod transport;

pub use departure::{Departure, Line};
pub use station::{SiteId, Station};
pub use text::{contains_case_insensitive, line_matches};
pub use time::{
    TimeError, minutes_until, minutes_until_at, parse_clock_time, parse_timestamp,
};
pub use transport::{InvalidTransportType, PatternsError, TransportPatterns, TransportType};
