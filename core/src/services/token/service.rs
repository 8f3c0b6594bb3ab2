//! Access/refresh token issuance and the refresh-session registry.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::token_store::TokenStore;

use super::config::TokenConfig;
use super::jwt::JwtCodec;

/// Namespace for refresh-session entries in the token store
pub const REFRESH_KEY_PREFIX: &str = "REFRESH:";

/// Length of the opaque refresh token id
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Service managing signed access tokens and store-backed refresh sessions
pub struct TokenService<S: TokenStore> {
    store: Arc<S>,
    codec: JwtCodec,
    config: TokenConfig,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service
    pub fn new(store: Arc<S>, config: TokenConfig) -> Self {
        let codec = JwtCodec::new(&config.jwt_secret);
        Self {
            store,
            codec,
            config,
        }
    }

    /// Issues a signed access token for the subject
    pub fn issue_access_token(&self, subject: &str, role: UserRole) -> DomainResult<String> {
        let claims = Claims::new(subject, role, self.config.access_token_expiry);
        self.codec.sign(&claims)
    }

    /// Issues a refresh token for the subject
    ///
    /// The opaque id is only returned after the store write has been
    /// acknowledged: a failure between generation and registration means
    /// no session was established, and the error propagates.
    pub async fn issue_refresh_token(&self, subject: &str) -> DomainResult<String> {
        let id = generate_refresh_id();

        self.store
            .put(
                &refresh_key(&id),
                subject,
                self.config.refresh_token_expiry as u64,
            )
            .await?;

        debug!(subject, "refresh session registered");
        Ok(id)
    }

    /// Issues an access/refresh token pair for a freshly authenticated subject
    pub async fn issue_token_pair(&self, subject: &str, role: UserRole) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(subject, role)?;
        let refresh_token = self.issue_refresh_token(subject).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
        ))
    }

    /// Verifies a signed access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        self.codec.verify(token)
    }

    /// Looks up the subject registered under a refresh token id
    ///
    /// # Returns
    /// * `Ok(subject)` - The id names a live session
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown, expired, or revoked id
    pub async fn resolve_refresh_token(&self, id: &str) -> DomainResult<String> {
        match self.store.get(&refresh_key(id)).await? {
            Some(subject) => Ok(subject),
            None => {
                warn!("refresh token not found or expired");
                Err(DomainError::Token(TokenError::InvalidRefreshToken))
            }
        }
    }

    /// Checks whether the subject has at least one live refresh session
    ///
    /// Walks every `REFRESH:*` entry and compares stored subjects; a
    /// missing entry means "no active session" regardless of any
    /// still-unexpired access token. O(live sessions) per call.
    pub async fn has_live_session(&self, subject: &str) -> DomainResult<bool> {
        let keys = self.store.keys_with_prefix(REFRESH_KEY_PREFIX).await?;

        for key in keys {
            if let Some(stored) = self.store.get(&key).await? {
                if stored == subject {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Revokes one live refresh session belonging to the subject
    ///
    /// Deletes the first matching entry only; other sessions of the same
    /// subject (other devices) stay live.
    ///
    /// # Returns
    /// * `Ok(true)` - A session was revoked
    /// * `Ok(false)` - No live session matched the subject
    pub async fn revoke_session(&self, subject: &str) -> DomainResult<bool> {
        let keys = self.store.keys_with_prefix(REFRESH_KEY_PREFIX).await?;

        for key in keys {
            if let Some(stored) = self.store.get(&key).await? {
                if stored == subject {
                    self.store.delete(&key).await?;
                    info!(subject, "refresh session revoked");
                    return Ok(true);
                }
            }
        }

        info!(subject, "no refresh session to revoke");
        Ok(false)
    }
}

/// Store key for a refresh token id
fn refresh_key(id: &str) -> String {
    format!("{}{}", REFRESH_KEY_PREFIX, id)
}

/// Generates a 32-character alphanumeric refresh token id
fn generate_refresh_id() -> String {
    let mut rng = rand::thread_rng();
    (0..REFRESH_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

#[cfg(test)]
mod unit_tests {
    // Inline tests for the private helpers; service behavior is covered
    // in the module's tests directory.
    use super::*;

    #[test]
    fn test_generate_refresh_id_shape() {
        let id = generate_refresh_id();
        assert_eq!(id.len(), REFRESH_TOKEN_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        // Two ids should practically never collide
        assert_ne!(id, generate_refresh_id());
    }

    #[test]
    fn test_refresh_key_namespacing() {
        assert_eq!(refresh_key("abc"), "REFRESH:abc");
    }
}
