//! Display helpers for optional profile fields.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Shown instead of an empty or missing profile field.
pub const EMPTY_PLACEHOLDER: &str = "❌ Empty/None";

/// Field value for display, or [`EMPTY_PLACEHOLDER`] when empty or absent.
#[must_use]
pub fn display_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => EMPTY_PLACEHOLDER.to_owned(),
    }
}

/// Character count of an optional field; absent counts as empty.
#[must_use]
pub fn field_len(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}
