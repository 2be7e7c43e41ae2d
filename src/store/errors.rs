//! Store error types
//!
//! Error codes:
//! - ROSTER_VALIDATION_FAILED (REJECT)
//! - ROSTER_RECORD_NOT_FOUND (REJECT)
//! - ROSTER_IO_FAILED (ERROR)

use std::path::Path;

use thiserror::Error;

use crate::record::{Field, ValidationError};

/// Errors surfaced by `RecordStore` operations.
///
/// Every failure is reported once; the store never retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("record {id} not found")]
    NotFound { id: u32 },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl StoreError {
    pub fn not_found(id: u32) -> Self {
        StoreError::NotFound { id }
    }

    pub fn io(path: &Path, reason: impl ToString) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "ROSTER_VALIDATION_FAILED",
            StoreError::NotFound { .. } => "ROSTER_RECORD_NOT_FOUND",
            StoreError::Io { .. } => "ROSTER_IO_FAILED",
        }
    }

    /// Field that failed validation, if this is a validation error
    pub fn field(&self) -> Option<Field> {
        match self {
            StoreError::Validation(e) => Some(e.field),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
