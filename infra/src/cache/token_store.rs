//! Redis-backed implementation of the token store contract.

use async_trait::async_trait;

use lf_core::errors::DomainResult;
use lf_core::repositories::token_store::TokenStore;

use super::redis_client::RedisClient;

/// Token store over the shared Redis instance
///
/// TTLs are enforced by Redis itself; `fetch_and_delete` maps to GETDEL
/// so concurrent redemption has exactly one winner. All failures come
/// back as `DomainError::Store` through the `InfrastructureError`
/// conversion.
#[derive(Clone)]
pub struct RedisTokenStore {
    client: RedisClient,
}

impl RedisTokenStore {
    /// Create a store over an existing client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.client.set_with_expiry(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.client.get(key).await?)
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        Ok(self.client.delete(key).await?)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> DomainResult<Vec<String>> {
        Ok(self.client.scan_keys(&format!("{}*", prefix)).await?)
    }

    async fn fetch_and_delete(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.client.get_del(key).await?)
    }
}
