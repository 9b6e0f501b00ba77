//! Departure filters.
//!
//! Each filter is a stable retain pass: it only drops departures, and the
//! survivors keep their relative order.

use tracing::debug;

use crate::domain::{
    Departure, SiteId, TransportPatterns, TransportType, contains_case_insensitive, line_matches,
};

/// Keep departures whose line matches `line` (see [`line_matches`]).
pub fn filter_by_line(departures: &mut Vec<Departure>, line: &str) {
    departures.retain(|d| line_matches(&d.line.designation, line));
}

/// Keep departures whose transport group belongs to `transport`.
pub fn filter_by_transport(
    departures: &mut Vec<Departure>,
    transport: TransportType,
    patterns: &TransportPatterns,
) {
    departures.retain(|d| patterns.matches(transport, &d.line.transport_group));
}

/// Keep departures heading to `destination`.
///
/// A purely numeric filter is treated as a site id and matched as a
/// substring of the destination text in its canonical decimal form, since
/// SL sometimes embeds ids there. Any other filter is a case-insensitive
/// substring match.
pub fn filter_by_destination(departures: &mut Vec<Departure>, destination: &str) {
    match SiteId::parse(destination) {
        Some(id) => {
            let id = id.to_string();
            departures.retain(|d| d.destination.contains(&id));
        }
        None => departures.retain(|d| contains_case_insensitive(&d.destination, destination)),
    }
}

/// The set of filters requested for one query.
///
/// Empty by default, which keeps every departure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureFilter {
    pub line: Option<String>,
    pub transport: Option<TransportType>,
    pub destination: Option<String>,
}

impl DepartureFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_transport(mut self, transport: TransportType) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.transport.is_none() && self.destination.is_none()
    }

    /// Apply every set filter: line, then transport, then destination.
    pub fn apply(&self, departures: &mut Vec<Departure>, patterns: &TransportPatterns) {
        if let Some(line) = &self.line {
            filter_by_line(departures, line);
            debug!(line = %line, remaining = departures.len(), "filtered by line");
        }

        if let Some(transport) = self.transport {
            filter_by_transport(departures, transport, patterns);
            debug!(%transport, remaining = departures.len(), "filtered by transport");
        }

        if let Some(destination) = &self.destination {
            filter_by_destination(departures, destination);
            debug!(destination = %destination, remaining = departures.len(), "filtered by destination");
        }
    }
}
