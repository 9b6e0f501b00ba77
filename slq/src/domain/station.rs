//! Station (SL "site") types.

use std::fmt;

/// A provider-assigned numeric site identifier.
///
/// SL identifies every stop area ("site") by an unsigned integer. The value
/// is not validated beyond being a well-formed number; zero is never
/// produced by name resolution and stands for "not found" upstream.
///
/// # Examples
///
/// ```
/// use slq::domain::SiteId;
///
/// let id = SiteId::parse("9001").unwrap();
/// assert_eq!(id.get(), 9001);
/// assert_eq!(id.to_string(), "9001");
///
/// // Only plain decimal digits are accepted
/// assert!(SiteId::parse("T-Centralen").is_none());
/// assert!(SiteId::parse("-1").is_none());
/// assert!(SiteId::parse("").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(u32);

impl SiteId {
    /// Create a site id from a raw integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a site id if the whole input is a non-negative decimal integer.
    ///
    /// Returns `None` for anything else, including signs, whitespace and
    /// values that do not fit in 32 bits.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok().map(Self)
    }

    /// Returns the raw integer.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Whether this is the reserved "not found" value.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteId({})", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named transit stop with its site id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub id: SiteId,
}

impl Station {
    pub fn new(name: impl Into<String>, id: SiteId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric() {
        assert_eq!(SiteId::parse("9001"), Some(SiteId::new(9001)));
        assert_eq!(SiteId::parse("0"), Some(SiteId::new(0)));
        assert_eq!(SiteId::parse("007"), Some(SiteId::new(7)));
    }

    #[test]
    fn reject_non_numeric() {
        assert!(SiteId::parse("").is_none());
        assert!(SiteId::parse("abc").is_none());
        assert!(SiteId::parse("90 01").is_none());
        assert!(SiteId::parse(" 9001").is_none());
        assert!(SiteId::parse("+9001").is_none());
        assert!(SiteId::parse("9001x").is_none());
    }

    #[test]
    fn reject_overflow() {
        assert!(SiteId::parse("4294967295").is_some());
        assert!(SiteId::parse("4294967296").is_none());
    }

    #[test]
    fn zero_is_reserved() {
        assert!(SiteId::new(0).is_zero());
        assert!(!SiteId::new(9001).is_zero());
    }

    #[test]
    fn debug_and_display() {
        let id = SiteId::new(1002);
        assert_eq!(format!("{:?}", id), "SiteId(1002)");
        assert_eq!(id.to_string(), "1002");
    }
}
