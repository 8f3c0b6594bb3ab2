//! # Learnify Infrastructure
//!
//! Redis-backed implementations of the core store and channel
//! interfaces, plus the bcrypt password hasher and an in-memory user
//! repository standing in for the external relational collaborator.

pub mod cache;
pub mod database;
pub mod queue;
pub mod security;

use lf_core::errors::DomainError;
use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Redis connection or command failure
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    /// Infrastructure faults surface to the domain as retryable store
    /// errors, never as absence.
    fn from(error: InfrastructureError) -> Self {
        DomainError::Store {
            message: error.to_string(),
        }
    }
}
