//! Centralized validation and helper functions.

/// Maximum number of suspects allowed in a single database (DOS protection)
pub const MAX_SUSPECTS: usize = 100_000;

/// Maximum number of marker columns allowed in a database header
pub const MAX_MARKERS: usize = 1_000;

/// Maximum sequence length accepted by the readers, in bases
pub const MAX_SEQUENCE_LENGTH: usize = 500_000_000;

/// Validate that a string can be used as an STR marker.
///
/// Any non-empty string without whitespace is accepted; the alphabet is not checked.
///
/// # Examples
///
/// ```
/// use str_profiler::utils::validation::is_valid_marker;
///
/// assert!(is_valid_marker("AGAT"));
/// assert!(!is_valid_marker(""));
/// assert!(!is_valid_marker("AG AT"));
/// ```
#[must_use]
pub fn is_valid_marker(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

/// Strip surrounding whitespace and one layer of double quotes from a table field
#[must_use]
pub fn clean_field(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
}

/// Check if adding another suspect would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new suspect.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_suspect_limit(count: usize) -> Option<String> {
    if count >= MAX_SUSPECTS {
        Some(format!(
            "Too many suspects: adding another would exceed maximum of {MAX_SUSPECTS}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("  Alice "), "Alice");
        assert_eq!(clean_field("\"Alice\""), "Alice");
        assert_eq!(clean_field(" \" AGAT \" "), "AGAT");
        assert_eq!(clean_field("\"unterminated"), "\"unterminated");
        assert_eq!(clean_field("\""), "\"");
    }

    #[test]
    fn test_check_suspect_limit() {
        assert!(check_suspect_limit(0).is_none());
        assert!(check_suspect_limit(MAX_SUSPECTS - 1).is_none());
        assert!(check_suspect_limit(MAX_SUSPECTS).is_some());
    }
}
