//! Centralized input limits and helper functions.

use std::path::Path;

/// Maximum number of contacts accepted from a single input.
///
/// Duplicate finding compares every pair, so 100k contacts is already
/// roughly five billion comparisons.
pub const MAX_CONTACTS: usize = 100_000;

/// Check if adding another contact would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contact.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use contact_dedup::utils::validation::{check_contact_limit, MAX_CONTACTS};
///
/// assert!(check_contact_limit(0).is_none());
/// assert!(check_contact_limit(MAX_CONTACTS).is_some());
/// ```
#[must_use]
pub fn check_contact_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTACTS {
        Some(format!(
            "Too many contacts: adding another would exceed maximum of {MAX_CONTACTS}"
        ))
    } else {
        None
    }
}

/// Number of unordered pairs among `n` items: n(n-1)/2
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// True if the path names a gzip-compressed file (`.gz` extension)
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// True if the path is `-`, meaning stdin/stdout
#[must_use]
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Parse a single-character delimiter argument into a byte.
///
/// Accepts a literal character or the names `tab`, `comma`, `semicolon`, `pipe`.
///
/// # Errors
///
/// Returns an error message if the delimiter is empty, more than one
/// character, or not ASCII.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    let resolved = match s.to_ascii_lowercase().as_str() {
        "tab" | "\\t" => "\t".to_string(),
        "comma" => ",".to_string(),
        "semicolon" => ";".to_string(),
        "pipe" => "|".to_string(),
        _ => s.to_string(),
    };

    let mut chars = resolved.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => u8::try_from(c).map_err(|e| e.to_string()),
        (Some(_), None) => Err(format!("Delimiter must be ASCII: '{s}'")),
        (None, _) => Err("Delimiter must not be empty".to_string()),
        _ => Err(format!("Delimiter must be a single character: '{s}'")),
    }
}
