//! Authentication request/response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lf_core::domain::entities::user::UserRole;
use lf_core::services::correlation::SignupPayload;

/// Request body for POST /api/v1/auth/signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 16))]
    pub phone_number: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

impl From<SignupRequest> for SignupPayload {
    fn from(request: SignupRequest) -> Self {
        SignupPayload {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            password: request.password,
        }
    }
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/refresh
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Response body for a successful refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Request body for POST /api/v1/auth/reset
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetRequest {
    #[validate(email)]
    pub email: String,
}

/// Request body for POST /api/v1/auth/reset/confirm
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmResetRequest {
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// Query parameter carrying a correlation token
#[derive(Debug, Clone, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

/// Response body for GET /api/v1/users/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub subject: String,
    pub role: UserRole,
}
