//! Password hashing boundary

use crate::errors::DomainResult;

/// Trait for password hashing and verification
///
/// The algorithm choice lives in the infrastructure layer; domain code
/// only ever sees opaque hashes.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}
