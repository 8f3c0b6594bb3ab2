use actix_web::{web, HttpResponse};

use crate::dto::auth::{RefreshResponse, RefreshTokenRequest};
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a live refresh token id for a fresh access token. Unlike
/// the admission filters this endpoint is NOT fail-open: an absent or
/// expired id is an explicit 401.
///
/// # Request Body
///
/// ```json
/// { "refresh_token": "string" }
/// ```
///
/// # Responses
/// - 200: `{access_token}`
/// - 401: invalid or expired refresh token
pub async fn refresh<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .auth_service
        .refresh_access_token(&request.refresh_token)
        .await
    {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(&error),
    }
}
