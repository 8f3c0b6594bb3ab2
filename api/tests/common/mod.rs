//! Shared fixtures for API tests: the full app wired over in-memory
//! collaborators.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use lf_api::routes::auth::AppState;
use lf_core::domain::entities::user::{User, UserRole};
use lf_core::repositories::token_store::MockTokenStore;
use lf_core::repositories::user::MockUserRepository;
use lf_core::services::auth::{AuthService, MockPasswordHasher};
use lf_core::services::correlation::{CorrelationConfig, CorrelationService, MockEventPublisher};
use lf_core::services::token::{JwtCodec, TokenConfig, TokenService};

pub const TEST_SECRET: &str = "api-test-secret";

pub type TestAppState =
    AppState<MockUserRepository, MockTokenStore, MockEventPublisher, MockPasswordHasher>;

pub struct TestContext {
    pub state: web::Data<TestAppState>,
    pub users: Arc<MockUserRepository>,
    pub store: Arc<MockTokenStore>,
    pub publisher: Arc<MockEventPublisher>,
    pub token_service: Arc<TokenService<MockTokenStore>>,
}

pub fn context() -> TestContext {
    let store = Arc::new(MockTokenStore::new());
    let users = Arc::new(MockUserRepository::new());
    let publisher = Arc::new(MockEventPublisher::new());
    let hasher = Arc::new(MockPasswordHasher::new());

    let token_service = Arc::new(TokenService::new(
        Arc::clone(&store),
        TokenConfig {
            jwt_secret: TEST_SECRET.to_string(),
            ..TokenConfig::default()
        },
    ));
    let correlation_service = Arc::new(CorrelationService::new(
        Arc::clone(&store),
        Arc::clone(&publisher),
        CorrelationConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        Arc::clone(&token_service),
        correlation_service,
        hasher,
    ));

    let state = web::Data::new(AppState {
        auth_service,
        token_service: Arc::clone(&token_service),
        jwt_codec: Arc::new(JwtCodec::new(TEST_SECRET)),
    });

    TestContext {
        state,
        users,
        store,
        publisher,
        token_service,
    }
}

/// Seed a user whose password matches under the mock hasher
pub async fn seed_user(ctx: &TestContext, email: &str, password: &str, role: UserRole) -> User {
    let mut user = User::new(
        "Alice".to_string(),
        "Smith".to_string(),
        email.to_string(),
        format!("+614{:08}", email.len()),
        format!("hashed:{}", password),
    );
    user.role = role;
    ctx.users.insert(user.clone()).await;
    user
}
