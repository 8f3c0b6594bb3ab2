//! User repository trait defining the interface for user persistence.
//!
//! Durable user storage is an external collaborator of the
//! authentication fabric; this trait is the whole boundary. The auth
//! service only ever looks accounts up, creates them after signup
//! verification, and rewrites credentials after reset confirmation.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<User>>;

    /// Persist a new user record
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user
    /// * `Err(DomainError)` - Save failed (e.g. duplicate email)
    async fn save(&self, user: User) -> DomainResult<User>;

    /// Replace the password hash of the user with the given email
    ///
    /// # Returns
    /// * `Ok(true)` - Credential updated
    /// * `Ok(false)` - No user with that email
    async fn update_password(&self, email: &str, password_hash: &str) -> DomainResult<bool>;

    /// Check whether an account with this email exists
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Check whether an account with this phone number exists
    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool> {
        Ok(self.find_by_phone(phone_number).await?.is_some())
    }
}
