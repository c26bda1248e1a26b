//! Domain-level errors.
//!
//! Raised when a value would break a `User` invariant. Mapping to transport
//! status codes happens in `common`.

use thiserror::Error;

/// Invariant violation on a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field does not satisfy the entity's rules
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
