use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ConfirmResetRequest, ResetRequest, TokenQuery};
use crate::dto::validation_error_response;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;
use lf_shared::types::response::MessageResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/reset
///
/// Begins the password reset workflow for an existing account. An
/// unknown email is an explicit 404 by contract.
///
/// # Responses
/// - 200: reset link on its way
/// - 404: no account with that email
pub async fn request_reset<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    request: web::Json<ResetRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!("password reset requested for email: {}", request.email);

    match state.auth_service.request_reset(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Reset link sent. Please check your inbox.",
        )),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/auth/reset/confirm?token=...
///
/// Redeems a reset correlation token (at most once) and replaces the
/// account credential.
///
/// # Responses
/// - 200: password updated
/// - 400: token expired, invalid, or already used
pub async fn confirm_reset<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    query: web::Query<TokenQuery>,
    request: web::Json<ConfirmResetRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .confirm_reset(&query.token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Password has been reset successfully!",
        )),
        Err(error) => handle_domain_error(&error),
    }
}
