//! Token service configuration

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for token issuance and verification
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared symmetric secret for HS256 signing
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds (store-enforced TTL)
    pub refresh_token_expiry: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-change-in-production"),
            access_token_expiry: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_token_expiry: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

impl TokenConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &lf_shared::config::JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }
}
