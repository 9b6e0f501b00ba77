//! SL departure query client.
//!
//! A command-line client for Storstockholms Lokaltrafik's real-time API:
//! look up stations by name and list upcoming departures, filtered by
//! line, transport mode and destination.

pub mod board;
pub mod domain;
pub mod query;
pub mod sl;
