use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::authorize::Authenticated;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;
use lf_shared::types::response::MessageResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Requires an attached principal (401 otherwise, via the extractor).
/// Deletes ONE live refresh session of the caller's subject; sessions
/// on other devices stay live. The caller's access token remains
/// cryptographically valid until its own expiry, but the gateway stops
/// admitting it once no live session remains.
///
/// # Responses
/// - 200: `{message}` whether or not a session was found to delete
/// - 401: no authenticated principal
pub async fn logout<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    auth: Authenticated,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    match state.auth_service.logout(&auth.0.subject).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Logged out successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
