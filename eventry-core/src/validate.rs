//! Input format validation.
//!
//! These are pure predicates: the interactive retry loops live in the CLI,
//! which calls back into these until the input matches. Only the shape of
//! the input is checked — `31/02/2099` and `99:99` both pass, matching the
//! registry's contract of format-only validation.

use std::sync::OnceLock;

use regex::Regex;

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Exactly `DD/MM/YYYY`, ASCII digits and slashes.
pub fn is_valid_date(input: &str) -> bool {
    DATE_PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap())
        .is_match(input)
}

/// Exactly `HH:MM`, ASCII digits and a colon.
pub fn is_valid_time(input: &str) -> bool {
    TIME_PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap())
        .is_match(input)
}

/// Location normalization applied when an event is added: commas removed
/// (they are the record delimiter), lower-cased.
pub fn normalize_location(input: &str) -> String {
    input.to_lowercase().replace(',', "")
}

/// Strip commas from a free-text value, leaving the case alone.
pub fn strip_commas(input: &str) -> String {
    input.replace(',', "")
}
