//! Verified request identity attached by the admission filters.

use super::token::Claims;
use super::user::UserRole;

/// The identity a request carries after passing an admission filter
///
/// Request-scoped and never persisted. Handlers receive it explicitly
/// (through request extensions) rather than from any ambient global, and
/// authorization decisions go through [`Principal::authorized_for`]
/// instead of ad-hoc role branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Verified subject (the user's email)
    pub subject: String,

    /// Verified role from the signed claims
    pub role: UserRole,
}

impl Principal {
    /// Creates a principal from verified claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            subject: claims.sub.clone(),
            role: claims.role,
        }
    }

    /// Single authorization capability check: does this principal hold
    /// one of the required roles?
    pub fn authorized_for(&self, required: &[UserRole]) -> bool {
        required.contains(&self.role)
    }
}
