//! Capturing event publisher for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainResult;

use super::traits::EventPublisher;
use super::types::{ResetEvent, SignupEvent};

/// Publisher that records every event instead of sending it
#[derive(Clone, Default)]
pub struct MockEventPublisher {
    signup_events: Arc<Mutex<Vec<SignupEvent>>>,
    reset_events: Arc<Mutex<Vec<ResetEvent>>>,
}

impl MockEventPublisher {
    /// Create a new capturing publisher
    pub fn new() -> Self {
        Self::default()
    }

    /// All signup events published so far
    pub async fn signup_events(&self) -> Vec<SignupEvent> {
        self.signup_events.lock().await.clone()
    }

    /// All reset events published so far
    pub async fn reset_events(&self) -> Vec<ResetEvent> {
        self.reset_events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish_signup(&self, event: SignupEvent) -> DomainResult<()> {
        self.signup_events.lock().await.push(event);
        Ok(())
    }

    async fn publish_reset(&self, event: ResetEvent) -> DomainResult<()> {
        self.reset_events.lock().await.push(event);
        Ok(())
    }
}
