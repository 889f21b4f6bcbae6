//! Error type for the domain layer

use thiserror::Error;

use crate::DraftErrors;

/// Unified error type for domain operations
///
/// Field-level form violations live in [`crate::DraftErrors`]; `Validation`
/// carries their rendered form when a caller only needs one error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<DraftErrors> for DomainError {
    fn from(errors: DraftErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
