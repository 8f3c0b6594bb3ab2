//! User entity representing a registered account in the Learnify system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role carried by every account and embedded in signed claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Platform administrator
    Admin,
    /// Regular course platform user
    User,
}

impl UserRole {
    /// Wire representation used in claims and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }

    /// Parse the wire representation back into a role
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(UserRole::Admin),
            "USER" => Some(UserRole::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// Account may log in
    Enabled,
    /// Account is locked out of authentication
    Disabled,
}

/// User entity representing a registered account
///
/// A durable user record only exists after the signup verification
/// round trip completed; pending registrations live in the token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Email address, unique; doubles as the token subject
    pub email: String,

    /// Phone number, unique
    pub phone_number: String,

    /// Hashed password; never the plaintext
    pub password_hash: String,

    /// Role of the account
    pub role: UserRole,

    /// Account status
    pub status: UserStatus,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new enabled user with the `User` role
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            phone_number,
            password_hash,
            role: UserRole::User,
            status: UserStatus::Enabled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the account is allowed to authenticate
    pub fn is_enabled(&self) -> bool {
        matches!(self.status, UserStatus::Enabled)
    }

    /// Replaces the password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Disables the account
    pub fn disable(&mut self) {
        self.status = UserStatus::Disabled;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Alice".to_string(),
            "Smith".to_string(),
            "alice@example.com".to_string(),
            "+61400000000".to_string(),
            "$2b$12$hash".to_string(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Enabled);
        assert!(user.is_enabled());
    }

    #[test]
    fn test_disable_user() {
        let mut user = sample_user();

        user.disable();
        assert!(!user.is_enabled());
    }

    #[test]
    fn test_set_password_hash() {
        let mut user = sample_user();

        user.set_password_hash("$2b$12$newhash".to_string());
        assert_eq!(user.password_hash, "$2b$12$newhash");
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
        assert_eq!(UserRole::parse("USER"), Some(UserRole::User));
        assert_eq!(UserRole::parse("superuser"), None);

        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();

        assert_eq!(user, deserialized);
    }
}
