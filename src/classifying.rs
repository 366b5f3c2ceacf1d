//! Classification and equality helpers for token comparison
//!
//! The comparison layer treats numeric tokens with tolerance rather than
//! exact string match, and strips decorative punctuation before comparing
//! words. These helpers make those decisions; they never decide
//! correctness themselves.

use once_cell::sync::Lazy;
use regex::Regex;

/// Signed decimal literal with optional fraction and exponent.
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Check if a string is a numeric literal: optional sign, digits, at most
/// one decimal point, optional exponent with optional sign. Empty input
/// is not a number.
pub fn is_number(token: &str) -> bool {
    NUMBER_REGEX.is_match(token)
}

/// Strip leading and trailing characters that are neither alphanumeric
/// nor `.`, leaving interior punctuation untouched.
///
/// Normalizes tokens like `"word."` or `"(value)"` before comparison.
/// Returns an empty string when no alphanumeric or `.` character exists.
pub fn isolate_alphanum_and_number_punctuation(token: &str) -> String {
    token
        .trim_matches(|c: char| !(c.is_alphanumeric() || c == '.'))
        .to_string()
}

/// Check if two space-count lists agree at every position.
///
/// A length mismatch is `false`, not an error; whitespace-sensitive
/// exercises grade it as a plain difference.
pub fn white_space_lists_equal(expected: &[usize], student: &[usize]) -> bool {
    expected == student
}
