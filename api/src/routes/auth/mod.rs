//! Authentication route handlers
//!
//! One handler file per endpoint:
//! - signup (begin correlation workflow) and verify (redeem)
//! - login / refresh / logout (token lifecycle)
//! - reset request and confirmation

pub mod login;
pub mod logout;
pub mod refresh;
pub mod reset;
pub mod signup;
pub mod verify;

use std::sync::Arc;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::{AuthService, PasswordHasher};
use lf_core::services::correlation::EventPublisher;
use lf_core::services::token::{JwtCodec, TokenService};

/// Application state holding the shared services
pub struct AppState<U, S, P, H>
where
    U: UserRepository,
    S: TokenStore,
    P: EventPublisher,
    H: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, S, P, H>>,
    pub token_service: Arc<TokenService<S>>,
    pub jwt_codec: Arc<JwtCodec>,
}
