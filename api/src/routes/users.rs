//! User routes behind the service-local admission filter.

use actix_web::HttpResponse;

use crate::dto::auth::MeResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::authorize::{require_role, Authenticated};

use lf_core::domain::entities::user::UserRole;

/// Handler for GET /api/v1/users/me
///
/// Minimal protected route exercising defense in depth: the identity
/// here came from the service-local filter (signature/expiry only, no
/// store round trip), and the role guard runs per route.
///
/// # Responses
/// - 200: `{subject, role}`
/// - 401: no authenticated principal
/// - 403: role not allowed
pub async fn me(auth: Authenticated) -> HttpResponse {
    if let Err(error) = require_role(&auth.0, &[UserRole::Admin, UserRole::User]) {
        return handle_domain_error(&error);
    }

    HttpResponse::Ok().json(MeResponse {
        subject: auth.0.subject,
        role: auth.0.role,
    })
}
