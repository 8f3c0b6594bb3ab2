//! Domain error to HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse};

use lf_core::errors::{AuthError, DomainError};
use lf_shared::types::response::ErrorResponse;

/// Maps a domain error onto an HTTP error response
///
/// Store faults come back retryable (503) and are never conflated with
/// the explicit not-found / invalid-token verdicts.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = match error {
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AuthError::AccountDisabled => (StatusCode::UNAUTHORIZED, "account_disabled"),
            AuthError::DuplicateEmail => (StatusCode::CONFLICT, "duplicate_email"),
            AuthError::DuplicatePhone => (StatusCode::CONFLICT, "duplicate_phone"),
            AuthError::InvalidVerificationLink => {
                (StatusCode::BAD_REQUEST, "invalid_verification_link")
            }
            AuthError::InvalidResetToken => (StatusCode::BAD_REQUEST, "invalid_reset_token"),
            AuthError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
            AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "forbidden"),
        },
        // Explicit invalid-token failures at the refresh endpoint,
        // distinct from the filters' fail-open behavior
        DomainError::Token(_) => (StatusCode::UNAUTHORIZED, "invalid_token"),
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
        DomainError::Store { .. } => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
        DomainError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if status.is_server_error() {
        log::error!("request failed: {}", error);
    } else {
        log::warn!("request rejected: {}", error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, error.to_string()))
}
