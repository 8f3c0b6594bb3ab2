//! Single-use correlation token issuance and redemption.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::token_store::TokenStore;

use super::config::CorrelationConfig;
use super::traits::EventPublisher;
use super::types::{ResetEvent, SignupEvent, SignupPayload};

/// Namespace for pending signup entries in the token store
pub const SIGNUP_KEY_PREFIX: &str = "SIGNUP:";

/// Namespace for pending reset entries in the token store
pub const RESET_KEY_PREFIX: &str = "RESET_TOKEN:";

/// Service minting and redeeming single-use correlation tokens
pub struct CorrelationService<S: TokenStore, P: EventPublisher> {
    store: Arc<S>,
    publisher: Arc<P>,
    config: CorrelationConfig,
}

impl<S: TokenStore, P: EventPublisher> CorrelationService<S, P> {
    /// Creates a new correlation service
    pub fn new(store: Arc<S>, publisher: Arc<P>, config: CorrelationConfig) -> Self {
        Self {
            store,
            publisher,
            config,
        }
    }

    /// Begins a signup: stores the pending registration and publishes
    /// the verification event
    ///
    /// The caller has already rejected duplicates; this only binds the
    /// payload to a fresh token. The token reaches the user by mail and
    /// comes back through [`redeem_signup`](Self::redeem_signup).
    pub async fn begin_signup(&self, payload: &SignupPayload) -> DomainResult<String> {
        let token = Uuid::new_v4().to_string();
        let serialized =
            serde_json::to_string(payload).map_err(|e| DomainError::Internal {
                message: format!("failed to serialize signup payload: {}", e),
            })?;

        self.store
            .put(&signup_key(&token), &serialized, self.config.signup_ttl)
            .await?;

        self.publisher
            .publish_signup(SignupEvent {
                email: payload.email.clone(),
                token: token.clone(),
            })
            .await?;

        info!(email = %payload.email, "signup initiated, verification event published");
        Ok(token)
    }

    /// Redeems a signup token, at most once
    ///
    /// # Returns
    /// * `Ok(SignupPayload)` - This caller won the redemption
    /// * `Err(AuthError::InvalidVerificationLink)` - Absent, expired, or
    ///   already consumed
    pub async fn redeem_signup(&self, token: &str) -> DomainResult<SignupPayload> {
        match self.store.fetch_and_delete(&signup_key(token)).await? {
            Some(serialized) => {
                let payload =
                    serde_json::from_str(&serialized).map_err(|e| DomainError::Internal {
                        message: format!("corrupt signup payload in store: {}", e),
                    })?;
                Ok(payload)
            }
            None => {
                warn!("signup token not found or already consumed");
                Err(DomainError::Auth(AuthError::InvalidVerificationLink))
            }
        }
    }

    /// Begins a password reset for an existing account's email
    pub async fn begin_reset(&self, email: &str) -> DomainResult<String> {
        let token = Uuid::new_v4().to_string();

        self.store
            .put(&reset_key(&token), email, self.config.reset_ttl)
            .await?;

        self.publisher
            .publish_reset(ResetEvent {
                email: email.to_string(),
                token: token.clone(),
            })
            .await?;

        info!(email, "reset initiated, reset event published");
        Ok(token)
    }

    /// Redeems a reset token, at most once, returning the target email
    pub async fn redeem_reset(&self, token: &str) -> DomainResult<String> {
        match self.store.fetch_and_delete(&reset_key(token)).await? {
            Some(email) => Ok(email),
            None => {
                warn!("reset token not found or already consumed");
                Err(DomainError::Auth(AuthError::InvalidResetToken))
            }
        }
    }
}

fn signup_key(token: &str) -> String {
    format!("{}{}", SIGNUP_KEY_PREFIX, token)
}

fn reset_key(token: &str) -> String {
    format!("{}{}", RESET_KEY_PREFIX, token)
}
