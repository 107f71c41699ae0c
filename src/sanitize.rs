//! Free-text input cleanup.
//!
//! Strips everything except ASCII letters, digits, space, `_` and `-`.
//! The transform is total and idempotent.

/// Returns `input` with disallowed characters removed.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect()
}

/// Sanitizes an optional field, keeping `None` as `None`.
#[must_use]
pub fn sanitize_opt(input: Option<&str>) -> Option<String> {
    input.map(sanitize)
}

/// Sanitizes every entry of a list, dropping entries left blank.
#[must_use]
pub fn sanitize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| sanitize(item))
        .filter(|item| !item.trim().is_empty())
        .collect()
}
