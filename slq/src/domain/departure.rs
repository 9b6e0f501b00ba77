//! Departure and line types.

/// The line a departure runs on.
///
/// Only lines that carry a transport group are ever constructed from
/// provider data; see `sl::normalize_departures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Rider-facing route label, e.g. "14" or "28X".
    pub designation: String,
    /// Provider's free-text category, e.g. "Tunnelbanans blå linje".
    pub transport_group: String,
}

impl Line {
    pub fn new(designation: impl Into<String>, transport_group: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            transport_group: transport_group.into(),
        }
    }
}

/// One upcoming vehicle departure from a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Destination text as shown on the vehicle.
    pub destination: String,
    /// Expected departure as `YYYY-MM-DDTHH:MM:SS` local time.
    pub expected: String,
    pub line: Line,
}

impl Departure {
    pub fn new(destination: impl Into<String>, expected: impl Into<String>, line: Line) -> Self {
        Self {
            destination: destination.into(),
            expected: expected.into(),
            line,
        }
    }
}
