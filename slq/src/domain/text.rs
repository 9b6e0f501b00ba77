//! Text matching for station names, destinations and line designations.

/// Case-insensitive substring test.
///
/// Both operands are lowercased with Unicode case folding, so "SPÅRVÄG"
/// matches "spårväg". An empty `needle` always matches.
///
/// # Examples
///
/// ```
/// use slq::domain::contains_case_insensitive;
///
/// assert!(contains_case_insensitive("T-Centralen", "centralen"));
/// assert!(contains_case_insensitive("Mörby centrum", "MÖRBY"));
/// assert!(contains_case_insensitive("anything", ""));
/// assert!(!contains_case_insensitive("Odenplan", "slussen"));
/// ```
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a line designation matches a line filter.
///
/// Matches when the designation equals the filter ignoring case, or when it
/// starts with the filter and the next character is alphabetic. A base line
/// "28" therefore matches its lettered variants ("28X", "28s") but not other
/// lines that happen to share a numeric prefix ("280", "281").
///
/// # Examples
///
/// ```
/// use slq::domain::line_matches;
///
/// assert!(line_matches("28", "28"));
/// assert!(line_matches("28X", "28"));
/// assert!(line_matches("28x", "28X"));
/// assert!(!line_matches("280", "28"));
/// assert!(!line_matches("14", "28"));
/// ```
pub fn line_matches(designation: &str, filter: &str) -> bool {
    let designation = designation.to_lowercase();
    let filter = filter.to_lowercase();

    if designation == filter {
        return true;
    }

    designation
        .strip_prefix(filter.as_str())
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_alphabetic)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A designation always matches itself, whatever the case
        #[test]
        fn line_matches_itself(s in "[0-9A-Za-z]{1,5}") {
            prop_assert!(line_matches(&s, &s));
            prop_assert!(line_matches(&s.to_uppercase(), &s.to_lowercase()));
        }

        /// A letter after the filter is a variant of the same line
        #[test]
        fn letter_suffix_matches(base in "[0-9]{1,3}", suffix in "[A-Za-z]") {
            let designation = format!("{}{}", base, suffix);
            prop_assert!(line_matches(&designation, &base));
        }

        /// A digit after the filter is a different line
        #[test]
        fn digit_suffix_rejected(base in "[0-9]{1,3}", suffix in "[0-9]") {
            let designation = format!("{}{}", base, suffix);
            prop_assert!(!line_matches(&designation, &base));
        }

        /// Any slice of a string is found in it regardless of case
        #[test]
        fn substring_found(s in "[a-zA-Z ]{0,20}", start in 0usize..20, len in 0usize..20) {
            let start = start.min(s.len());
            let end = (start + len).min(s.len());
            let needle = s[start..end].to_uppercase();
            prop_assert!(contains_case_insensitive(&s, &needle));
        }
    }
}
