//! In-memory implementation of the token store for tests and development.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainResult;

use super::r#trait::TokenStore;

/// An entry with its expiry deadline
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory token store honoring TTLs
///
/// `fetch_and_delete` holds the write lock for the whole read-and-remove,
/// giving the same exactly-once redemption guarantee as the Redis
/// implementation's `GETDEL`.
#[derive(Clone)]
pub struct MockTokenStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MockTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live (unexpired) entries, for test assertions
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }

    /// Whether the store holds no live entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|e| !e.is_expired())
            .map(|e| e.value.clone()))
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(key).map(|e| !e.is_expired()).unwrap_or(false))
    }

    async fn keys_with_prefix(&self, prefix: &str) -> DomainResult<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(key, entry)| key.starts_with(prefix) && !entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn fetch_and_delete(&self, key: &str) -> DomainResult<Option<String>> {
        // Single write lock covers both the read and the removal
        let mut entries = self.entries.write().await;
        Ok(entries.remove(key).filter(|e| !e.is_expired()).map(|e| e.value))
    }
}
