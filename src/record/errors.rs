//! Field validation errors

use thiserror::Error;

use super::types::Field;

/// A record field failed validation.
///
/// Carries the first failing field only; validation stops there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub fn empty_name() -> Self {
        Self::new(Field::Name, "name must not be empty")
    }

    pub fn name_too_long(max: usize, actual: usize) -> Self {
        Self::new(
            Field::Name,
            format!("name is too long ({} characters, maximum {})", actual, max),
        )
    }

    pub fn name_has_digits() -> Self {
        Self::new(Field::Name, "name must not contain digits")
    }

    pub fn name_bad_char(c: char) -> Self {
        Self::new(
            Field::Name,
            format!(
                "name may only contain letters, spaces, hyphens and apostrophes (found {:?})",
                c
            ),
        )
    }

    pub fn out_of_range(field: Field, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(
            field,
            format!("expected {}, got {}", expected.into(), actual.into()),
        )
    }
}

/// Result type for field validation
pub type ValidationResult<T> = Result<T, ValidationError>;
