//! Field-level text validation shared by the movie and comment rules.
//!
//! Lengths are counted in characters to match `VARCHAR(n)` semantics.

use crate::error::CoreError;

/// Validate a required text field: non-blank and at most `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_max_len(field, value, max)
}

/// Validate an optional text field: when present, at most `max` characters.
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_len(field, v, max),
        None => Ok(()),
    }
}

fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {max})"
        )));
    }
    Ok(())
}
