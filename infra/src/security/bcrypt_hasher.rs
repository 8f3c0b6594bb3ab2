//! Bcrypt implementation of the password hashing boundary.

use lf_core::errors::{DomainError, DomainResult};
use lf_core::services::auth::PasswordHasher;

/// Password hasher backed by bcrypt
#[derive(Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        // Minimum cost keeps the test fast
        let hasher = BcryptPasswordHasher::new(4);

        let hash = hasher.hash("correct horse").unwrap();
        assert_ne!(hash, "correct horse");

        assert!(hasher.verify("correct horse", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let hasher = BcryptPasswordHasher::new(4);
        assert!(hasher.verify("password", "not-a-bcrypt-hash").is_err());
    }
}
