//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every rule violation in this layer maps onto one of four categories:
/// malformed input, a missing or foreign reference, a non-owner mutation
/// attempt, or an unresolvable uniqueness conflict. Nothing is recovered
/// locally; callers surface these to the transport layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authorized: {0}")]
    Authorization(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        DomainError::Authorization(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }

    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this error is a missing-reference failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    /// Check if this error is an ownership failure
    pub fn is_authorization(&self) -> bool {
        matches!(self, DomainError::Authorization(_))
    }

    /// Check if this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::validation("title must not be blank");
        assert_eq!(error.to_string(), "Validation failed: title must not be blank");
    }

    #[test]
    fn test_category_checks() {
        assert!(DomainError::validation("x").is_validation());
        assert!(DomainError::not_found("x").is_not_found());
        assert!(DomainError::authorization("x").is_authorization());
        assert!(DomainError::conflict("x").is_conflict());
        assert!(!DomainError::conflict("x").is_not_found());
    }
}
