//! Outbound mail channel integration trait

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::types::{ResetEvent, SignupEvent};

/// Trait for publishing mail events to the asynchronous channel
///
/// The channel itself (and the worker consuming it) is an external
/// collaborator; this side only publishes.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a signup verification event
    async fn publish_signup(&self, event: SignupEvent) -> DomainResult<()>;

    /// Publish a password reset event
    async fn publish_reset(&self, event: ResetEvent) -> DomainResult<()>;
}
