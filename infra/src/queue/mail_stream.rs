//! Mail event publisher over Redis Streams.

use async_trait::async_trait;
use tracing::info;

use lf_core::errors::DomainResult;
use lf_core::services::correlation::{EventPublisher, ResetEvent, SignupEvent};
use lf_shared::config::QueueConfig;

use crate::cache::RedisClient;

/// Publisher appending mail events to per-purpose streams
///
/// The mail worker consumes each stream exactly once and sends the
/// actual email; delivery concerns stop at the XADD here.
#[derive(Clone)]
pub struct RedisMailQueue {
    client: RedisClient,
    config: QueueConfig,
}

impl RedisMailQueue {
    /// Create a publisher over an existing client
    pub fn new(client: RedisClient, config: QueueConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl EventPublisher for RedisMailQueue {
    async fn publish_signup(&self, event: SignupEvent) -> DomainResult<()> {
        self.client
            .xadd(
                &self.config.verification_stream,
                &[("email", event.email.as_str()), ("token", event.token.as_str())],
            )
            .await?;

        info!(email = %event.email, stream = %self.config.verification_stream,
            "signup verification event published");
        Ok(())
    }

    async fn publish_reset(&self, event: ResetEvent) -> DomainResult<()> {
        self.client
            .xadd(
                &self.config.reset_stream,
                &[("email", event.email.as_str()), ("token", event.token.as_str())],
            )
            .await?;

        info!(email = %event.email, stream = %self.config.reset_stream,
            "password reset event published");
        Ok(())
    }
}
