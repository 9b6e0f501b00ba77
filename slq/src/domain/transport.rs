//! Transport categories and their provider-locale vocabulary.
//!
//! SL does not expose a stable mode field on departures, only a free-text
//! `group_of_lines` such as "Tunnelbanans blå linje" or "Pendeltåg". A
//! [`TransportPatterns`] table maps each [`TransportType`] to the words that
//! identify it in that text, so new vocabulary is a data change.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::text::contains_case_insensitive;

/// A transport mode a user can filter departures by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Metro,
    Bus,
    Train,
    Tram,
}

impl TransportType {
    /// All categories, in display order.
    pub const ALL: [TransportType; 4] = [
        TransportType::Metro,
        TransportType::Bus,
        TransportType::Train,
        TransportType::Tram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Metro => "metro",
            TransportType::Bus => "bus",
            TransportType::Train => "train",
            TransportType::Tram => "tram",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a transport token outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport type '{0}'. Valid types: metro, bus, train, tram")]
pub struct InvalidTransportType(pub String);

impl FromStr for TransportType {
    type Err = InvalidTransportType;

    /// Parse one of the lowercase tokens `metro`, `bus`, `train`, `tram`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidTransportType(s.to_string()))
    }
}

/// Error loading a transport pattern file.
#[derive(Debug, thiserror::Error)]
pub enum PatternsError {
    /// The file could not be read
    #[error("failed to read transport patterns: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a `{category: [pattern, ...]}` JSON object
    #[error("invalid transport patterns: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mapping from transport category to accepted transport-group substrings.
///
/// Matching is case-insensitive; a group belongs to a category when it
/// contains any of the category's patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPatterns {
    patterns: HashMap<TransportType, Vec<String>>,
}

impl TransportPatterns {
    /// Create an empty table; no group matches any category.
    pub fn empty() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Replace the patterns for one category.
    pub fn with(mut self, transport: TransportType, patterns: &[&str]) -> Self {
        self.patterns.insert(
            transport,
            patterns.iter().map(|p| (*p).to_string()).collect(),
        );
        self
    }

    /// Parse a JSON override such as `{"tram": ["spårväg", "lidingöbanan"]}`.
    ///
    /// Categories present in the JSON replace those in `self`; the rest are
    /// kept.
    pub fn merge_json(mut self, json: &str) -> Result<Self, PatternsError> {
        let overrides: HashMap<TransportType, Vec<String>> = serde_json::from_str(json)?;
        self.patterns.extend(overrides);
        Ok(self)
    }

    /// Load overrides from a JSON file on top of the SL defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PatternsError> {
        let json = std::fs::read_to_string(path)?;
        Self::default().merge_json(&json)
    }

    /// Patterns configured for a category.
    pub fn patterns(&self, transport: TransportType) -> &[String] {
        self.patterns
            .get(&transport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `transport_group` belongs to the given category.
    pub fn matches(&self, transport: TransportType, transport_group: &str) -> bool {
        self.patterns(transport)
            .iter()
            .any(|p| contains_case_insensitive(transport_group, p))
    }
}

impl Default for TransportPatterns {
    /// The SL vocabulary.
    fn default() -> Self {
        Self::empty()
            .with(TransportType::Metro, &["tunnelbanan"])
            .with(TransportType::Bus, &["buss", "närtrafiken"])
            .with(TransportType::Train, &["pendeltåg", "roslagsbanan"])
            .with(TransportType::Tram, &["spårväg"])
    }
}
