//! Domain-level input validation helpers.

use crate::error::CoreError;

/// Validate a user-supplied entity name: must be non-empty after trimming.
///
/// Returns the trimmed name on success so callers persist the canonical
/// form.
pub fn non_empty_name(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts() {
        assert_eq!(non_empty_name("name", "  Kitchen ").unwrap(), "Kitchen");
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = non_empty_name("house name", "   ").unwrap_err();
        assert!(err.to_string().contains("house name"));
    }
}
