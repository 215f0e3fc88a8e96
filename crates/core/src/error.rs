//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both kinds are recoverable: the object that raised them keeps its previous
/// state and the caller may retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. stability out of range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An action was requested on an object that does not support it.
    #[error("missing capability: {0}")]
    MissingCapability(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_capability(msg: impl Into<String>) -> Self {
        Self::MissingCapability(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }
}
