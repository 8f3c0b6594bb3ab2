//! Transparent password hasher for tests.

use crate::errors::DomainResult;

use super::hasher::PasswordHasher;

/// Hasher that prefixes instead of hashing; test use only
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        Ok(hash == format!("hashed:{}", password))
    }
}
