use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::SignupRequest;
use crate::dto::validation_error_response;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;
use lf_shared::types::response::MessageResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Begins the signup workflow: rejects duplicate email/phone before a
/// correlation token is minted, then stores the pending registration
/// and publishes the verification event. No account exists yet after
/// this call; the durable record is created at verification.
///
/// # Responses
/// - 200: verification email on its way
/// - 400: invalid request data
/// - 409: email or phone already registered
pub async fn signup<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    request: web::Json<SignupRequest>,
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

    log::info!("signup request for email: {}", request.email);

    match state.auth_service.signup(request.into_inner().into()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Verification email sent. Please check your inbox.",
        )),
        Err(error) => handle_domain_error(&error),
    }
}
