use actix_web::{web, HttpResponse};

use crate::dto::auth::TokenQuery;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;

use super::AppState;

/// Handler for GET /api/v1/auth/verify?token=...
///
/// Redeems a signup correlation token (at most once) and creates the
/// durable account. The consumed token is the proof of mailbox
/// ownership.
///
/// # Responses
/// - 200: account created, returns the public user projection
/// - 400: link expired, invalid, or already used
pub async fn verify<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    query: web::Query<TokenQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    match state.auth_service.verify_signup(&query.token).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}
