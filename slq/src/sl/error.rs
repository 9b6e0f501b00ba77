//! SL provider error types.

/// Errors fetching a payload from the SL API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status code
    #[error("HTTP request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Mock data could not be read from disk
    #[error("failed to read mock data: {0}")]
    Io(#[from] std::io::Error),

    /// Mock transport has no response for this URL
    #[error("no mock response for {0}")]
    NoRoute(String),
}

/// Errors turning a payload into stations or departures.
///
/// Only the top-level shape is checked strictly; malformed individual
/// records are skipped, not reported.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Body was not valid JSON
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Sites payload was not a JSON array
    #[error("expected a JSON array of sites")]
    ExpectedArray,

    /// Departures payload had no `departures` array
    #[error("expected an object with a departures array")]
    MissingDepartures,
}
