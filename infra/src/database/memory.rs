//! In-memory user repository for development deployments.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use lf_core::domain::entities::user::User;
use lf_core::errors::{DomainError, DomainResult};
use lf_core::repositories::user::UserRepository;

/// User repository keyed by email, held entirely in process memory
///
/// Contents vanish on restart; only the reference server and local
/// development use this. Production deployments plug a relational
/// implementation into the same trait.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no accounts are stored
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.phone_number == phone_number).cloned())
    }

    async fn save(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if let Some(existing) = users.get(&user.email) {
            if existing.id != user.id {
                return Err(DomainError::Validation {
                    message: "email already exists".to_string(),
                });
            }
        }

        info!(email = %user.email, "user record saved");
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> DomainResult<bool> {
        let mut users = self.users.write().await;

        match users.get_mut(email) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
