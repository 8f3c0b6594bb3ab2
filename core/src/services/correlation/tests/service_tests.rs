//! Correlation workflow tests over the in-memory store

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::token_store::{MockTokenStore, TokenStore};
use crate::services::correlation::{
    CorrelationConfig, CorrelationService, MockEventPublisher, SignupPayload, SIGNUP_KEY_PREFIX,
};

fn sample_payload() -> SignupPayload {
    SignupPayload {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        email: "a@b.com".to_string(),
        phone_number: "+61400000000".to_string(),
        password: "correct horse".to_string(),
    }
}

fn service() -> (
    CorrelationService<MockTokenStore, MockEventPublisher>,
    Arc<MockTokenStore>,
    Arc<MockEventPublisher>,
) {
    let store = Arc::new(MockTokenStore::new());
    let publisher = Arc::new(MockEventPublisher::new());
    let service = CorrelationService::new(
        Arc::clone(&store),
        Arc::clone(&publisher),
        CorrelationConfig::default(),
    );
    (service, store, publisher)
}

#[tokio::test]
async fn test_begin_signup_stores_payload_and_publishes_event() {
    let (service, store, publisher) = service();

    let token = service.begin_signup(&sample_payload()).await.unwrap();

    let stored = store
        .get(&format!("{}{}", SIGNUP_KEY_PREFIX, token))
        .await
        .unwrap();
    assert!(stored.is_some());

    let events = publisher.signup_events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].email, "a@b.com");
    assert_eq!(events[0].token, token);
}

#[tokio::test]
async fn test_redeem_signup_returns_payload_once() {
    let (service, _, _) = service();
    let payload = sample_payload();

    let token = service.begin_signup(&payload).await.unwrap();

    let redeemed = service.redeem_signup(&token).await.unwrap();
    assert_eq!(redeemed, payload);

    // Second redemption, even immediately after, observes not-found
    let error = service.redeem_signup(&token).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidVerificationLink)
    ));
}

#[tokio::test]
async fn test_redeem_unknown_signup_token() {
    let (service, _, _) = service();

    let error = service.redeem_signup("nonexistent").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidVerificationLink)
    ));
}

#[tokio::test]
async fn test_concurrent_signup_redemption_single_winner() {
    let (service, _, _) = service();
    let service = Arc::new(service);

    let token = service.begin_signup(&sample_payload()).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            service.redeem_signup(&token).await
        }));
    }

    let mut winners = 0;
    let mut losers = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(DomainError::Auth(AuthError::InvalidVerificationLink)) => losers += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(losers, 7);
}

#[tokio::test]
async fn test_reset_round_trip() {
    let (service, _, publisher) = service();

    let token = service.begin_reset("a@b.com").await.unwrap();

    let events = publisher.reset_events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].token, token);

    let email = service.redeem_reset(&token).await.unwrap();
    assert_eq!(email, "a@b.com");

    let error = service.redeem_reset(&token).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidResetToken)
    ));
}

#[tokio::test]
async fn test_signup_and_reset_namespaces_do_not_collide() {
    let (service, _, _) = service();

    let reset_token = service.begin_reset("a@b.com").await.unwrap();

    // A reset token is not redeemable as a signup token
    assert!(service.redeem_signup(&reset_token).await.is_err());
    assert_eq!(service.redeem_reset(&reset_token).await.unwrap(), "a@b.com");
}
