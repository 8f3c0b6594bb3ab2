use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::dto::validation_error_response;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Delegated credential check against the user repository; on success
/// returns the token pair and the public user projection. The refresh
/// session is registered in the token store before success is reported.
///
/// # Responses
/// - 200: `{access_token, refresh_token, expires_in, user}`
/// - 401: unknown email, wrong password, or disabled account
pub async fn login<U, S, P, H>(
    state: web::Data<AppState<U, S, P, H>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
