//! Per-route authorization over the attached principal.
//!
//! Both admission filters are fail-open, so the terminal decision lives
//! here: extractors turn a missing principal into a 401, and
//! [`require_role`] is the single capability check every protected
//! route goes through instead of ad-hoc role branching.

use actix_web::{dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use lf_core::domain::entities::principal::Principal;
use lf_core::domain::entities::user::UserRole;
use lf_core::errors::{AuthError, DomainError};

/// Extractor for routes that require an authenticated principal
///
/// Yields 401 when no admission filter attached an identity.
pub struct Authenticated(pub Principal);

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Principal>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Extractor for routes that merely observe the principal if present
pub struct MaybeAuthenticated(pub Option<Principal>);

impl FromRequest for MaybeAuthenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(Ok(MaybeAuthenticated(principal)))
    }
}

/// Uniform role check for protected routes
///
/// # Returns
/// * `Ok(())` - Principal holds one of the required roles
/// * `Err(AuthError::InsufficientPermissions)` - Role mismatch (403)
pub fn require_role(principal: &Principal, required: &[UserRole]) -> Result<(), DomainError> {
    if principal.authorized_for(required) {
        Ok(())
    } else {
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role() {
        let principal = Principal {
            subject: "alice@example.com".to_string(),
            role: UserRole::User,
        };

        assert!(require_role(&principal, &[UserRole::User]).is_ok());
        assert!(require_role(&principal, &[UserRole::Admin, UserRole::User]).is_ok());

        let error = require_role(&principal, &[UserRole::Admin]).unwrap_err();
        assert!(matches!(
            error,
            DomainError::Auth(AuthError::InsufficientPermissions)
        ));
    }
}
