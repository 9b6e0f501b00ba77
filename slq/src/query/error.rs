//! Query error types.

use crate::sl::{FetchError, FormatError};

/// Errors that fail a whole query.
///
/// Malformed records and unparsable timestamps are not errors at this
/// level; they are skipped or shown with placeholders.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Network failure or non-success status
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Payload did not have the expected top-level shape
    #[error(transparent)]
    Format(#[from] FormatError),

    /// No station name contains the query
    #[error("no station found for '{0}'")]
    StationNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::StationNotFound("Atlantis".into());
        assert_eq!(err.to_string(), "no station found for 'Atlantis'");

        let err = QueryError::from(FormatError::MissingDepartures);
        assert_eq!(err.to_string(), "expected an object with a departures array");

        let err = QueryError::from(FetchError::Status {
            status: 500,
            url: "http://x/sites".into(),
        });
        assert_eq!(
            err.to_string(),
            "HTTP request to http://x/sites failed with status 500"
        );
    }
}
