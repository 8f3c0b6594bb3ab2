//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// Token store unavailable or failing. Infrastructure fault, always
    /// retryable, never interpreted as "no session".
    #[error("Token store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let error: DomainError = AuthError::InvalidCredentials.into();
        assert!(matches!(error, DomainError::Auth(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_store_error_is_distinct_from_not_found() {
        let store = DomainError::Store {
            message: "connection refused".to_string(),
        };
        assert!(!matches!(store, DomainError::NotFound { .. }));
    }
}
