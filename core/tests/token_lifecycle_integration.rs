//! Cross-service token lifecycle checks through the public crate API.

use std::sync::Arc;

use lf_core::domain::entities::user::UserRole;
use lf_core::repositories::token_store::MockTokenStore;
use lf_core::services::token::{TokenConfig, TokenService};

fn token_service() -> TokenService<MockTokenStore> {
    let store = Arc::new(MockTokenStore::new());
    TokenService::new(
        store,
        TokenConfig {
            jwt_secret: "integration-secret".to_string(),
            ..TokenConfig::default()
        },
    )
}

#[tokio::test]
async fn revocation_takes_effect_on_next_liveness_check() {
    let service = token_service();

    let pair = service.issue_token_pair("alice", UserRole::User).await.unwrap();
    assert!(service.has_live_session("alice").await.unwrap());

    // Logout: the session disappears on the very next check, while the
    // already-issued access token stays cryptographically valid until
    // its own expiry.
    assert!(service.revoke_session("alice").await.unwrap());
    assert!(!service.has_live_session("alice").await.unwrap());
    assert!(service.verify_access_token(&pair.access_token).is_ok());
}

#[tokio::test]
async fn tokens_from_another_deployment_are_rejected() {
    let ours = token_service();
    let theirs = TokenService::new(
        Arc::new(MockTokenStore::new()),
        TokenConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..TokenConfig::default()
        },
    );

    let token = theirs.issue_access_token("alice", UserRole::Admin).unwrap();
    assert!(ours.verify_access_token(&token).is_err());
}
