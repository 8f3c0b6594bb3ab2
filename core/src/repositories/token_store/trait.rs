//! Token store trait defining the shared cache contract.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Contract for the key-value store shared by the gateway and services
///
/// The store is the sole source of truth for session liveness and for
/// pending correlation tokens. Entries expire under store-enforced TTLs;
/// no caller polls for expiry. Infrastructure faults must surface as
/// `DomainError::Store`, never as absence.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store a value under `key` with a time-to-live in seconds
    ///
    /// # Returns
    /// * `Ok(())` - The write was acknowledged by the store
    /// * `Err(DomainError::Store)` - The store is unavailable
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Fetch the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry present and not expired
    /// * `Ok(None)` - Entry absent or already expired
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Delete the entry under `key`
    ///
    /// # Returns
    /// * `Ok(true)` - An entry was deleted
    /// * `Ok(false)` - No entry existed
    async fn delete(&self, key: &str) -> DomainResult<bool>;

    /// List every live key starting with `prefix`
    ///
    /// Used to walk all live refresh sessions when checking one
    /// subject's liveness. O(live entries) per call; acceptable at the
    /// assumed scale, a secondary index is the production fix.
    async fn keys_with_prefix(&self, prefix: &str) -> DomainResult<Vec<String>>;

    /// Atomically fetch and delete the entry under `key`
    ///
    /// This is the single-use redemption primitive: under concurrent
    /// callers exactly one receives the value and the rest observe
    /// `None`. Implementations must use one store-level operation, not
    /// a separate get followed by a delete.
    async fn fetch_and_delete(&self, key: &str) -> DomainResult<Option<String>>;
}
