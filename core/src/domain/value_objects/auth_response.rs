//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserRole};

/// Public projection of a user, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Role of the account
    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Authentication response containing tokens and the user projection
///
/// Returned after successful login. The refresh token is only handed to
/// the client once its store registration has been acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token id
    pub refresh_token: String,

    /// Access token expiry in seconds
    pub expires_in: i64,

    /// Public projection of the authenticated user
    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and user
    pub fn from_token_pair(token_pair: TokenPair, user: &User) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.expires_in,
            user: UserProfile::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_user() {
        let user = User::new(
            "Alice".to_string(),
            "Smith".to_string(),
            "alice@example.com".to_string(),
            "+61400000000".to_string(),
            "$2b$12$hash".to_string(),
        );

        let profile = UserProfile::from(&user);
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.role, UserRole::User);

        // The hash must never leak through the projection
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hash"));
    }

    #[test]
    fn test_from_token_pair() {
        let user = User::new(
            "Alice".to_string(),
            "Smith".to_string(),
            "alice@example.com".to_string(),
            "+61400000000".to_string(),
            "$2b$12$hash".to_string(),
        );
        let pair = TokenPair::new("access.jwt".to_string(), "r1".to_string(), 900);

        let response = AuthResponse::from_token_pair(pair, &user);
        assert_eq!(response.access_token, "access.jwt");
        assert_eq!(response.refresh_token, "r1");
        assert_eq!(response.expires_in, 900);
        assert_eq!(response.user.email, "alice@example.com");
    }
}
