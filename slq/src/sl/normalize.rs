//! Conversion from SL JSON payloads to domain types.
//!
//! SL data is heterogeneous: fields go missing or turn up as null from one
//! record to the next. Normalization is strict about the top-level shape
//! only; any record that lacks a required field is skipped so that one bad
//! entry never discards a whole response.

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{Departure, Line, SiteId, Station};

use super::error::FormatError;

/// Decode a response body into a generic JSON value.
pub fn decode(body: &[u8]) -> Result<Value, FormatError> {
    Ok(serde_json::from_slice(body)?)
}

/// Convert a sites payload (a JSON array of site objects) into stations.
///
/// Elements without a string `name` and an unsigned integer `id` that fits
/// in 32 bits are skipped.
pub fn normalize_stations(raw: &Value) -> Result<Vec<Station>, FormatError> {
    let sites = raw.as_array().ok_or(FormatError::ExpectedArray)?;

    let stations: Vec<Station> = sites.iter().filter_map(convert_site).collect();

    debug!(
        total = sites.len(),
        kept = stations.len(),
        "normalized sites"
    );

    Ok(stations)
}

fn convert_site(site: &Value) -> Option<Station> {
    let name = site.get("name").and_then(Value::as_str);
    let id = site
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok());

    match (name, id) {
        (Some(name), Some(id)) => Some(Station::new(name, SiteId::new(id))),
        _ => {
            trace!(site = %site, "skipping site without name or id");
            None
        }
    }
}

/// Convert a departures payload (`{"departures": [...]}`) into departures.
///
/// A record is kept only if it has a non-empty string `destination`,
/// `expected`, `line.designation` and `line.group_of_lines`. Records without
/// a transport group are dropped entirely rather than kept with an unknown
/// mode.
pub fn normalize_departures(raw: &Value) -> Result<Vec<Departure>, FormatError> {
    let records = raw
        .get("departures")
        .and_then(Value::as_array)
        .ok_or(FormatError::MissingDepartures)?;

    let departures: Vec<Departure> = records.iter().filter_map(convert_departure).collect();

    debug!(
        total = records.len(),
        kept = departures.len(),
        "normalized departures"
    );

    Ok(departures)
}

fn convert_departure(record: &Value) -> Option<Departure> {
    let destination = non_empty_str(record, "destination");
    let expected = non_empty_str(record, "expected");
    let line = record.get("line").filter(|l| l.is_object());

    let (Some(destination), Some(expected), Some(line)) = (destination, expected, line) else {
        trace!(record = %record, "skipping malformed departure");
        return None;
    };

    let designation = non_empty_str(line, "designation")?;

    let Some(group) = non_empty_str(line, "group_of_lines") else {
        trace!(
            line = designation,
            destination,
            "skipping departure without transport group"
        );
        return None;
    };

    Some(Departure::new(
        destination,
        expected,
        Line::new(designation, group),
    ))
}

/// A string field that is present, a string, and not empty.
fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
