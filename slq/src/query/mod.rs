//! Departure and station queries.
//!
//! A departures query runs in a fixed order:
//! 1. resolve the station to a site id (fetching the site listing only if
//!    the user gave a name)
//! 2. fetch and normalize the departures board
//! 3. apply the line, transport and destination filters
//!
//! Truncation to a display count is left to the caller.

mod client;
mod error;
mod filter;
mod resolve;


pub use client::SlClient;
pub use error::QueryError;
pub use filter::{DepartureFilter, filter_by_destination, filter_by_line, filter_by_transport};
pub use resolve::{matching_stations, resolve_station};
