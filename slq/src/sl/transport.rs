//! HTTP transport for the SL API.
//!
//! The query layer never talks to the network directly: it is handed a
//! [`Transport`] and only sees status codes and bodies. [`HttpTransport`]
//! is the reqwest-backed implementation; `MockTransport` serves canned
//! responses for tests and offline runs.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use super::config::SlConfig;
use super::error::FetchError;

/// A raw HTTP response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches a URL and returns whatever the server answered.
///
/// Implementations report only network-level failures as errors; status
/// codes are judged by the caller.
pub trait Transport {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}

/// Transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the headers and timeout from `config`.
    pub fn new(config: &SlConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(url, status, bytes = body.len(), "fetched");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
