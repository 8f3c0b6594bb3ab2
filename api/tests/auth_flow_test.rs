//! Full account lifecycle over the HTTP surface:
//! signup -> verify -> login -> refresh -> logout, plus password reset.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{context, seed_user};
use lf_core::domain::entities::user::UserRole;
use lf_core::domain::value_objects::UserProfile;

#[actix_rt::test]
async fn signup_verify_login_refresh_logout() {
    let ctx = context();
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    // Signup: nothing durable yet, one event on the mail channel
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "first_name": "Alice",
            "last_name": "Smith",
            "email": "alice@example.com",
            "phone_number": "+61400000000",
            "password": "correct horse"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let events = ctx.publisher.signup_events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].email, "alice@example.com");

    // Verify: redeem the mailed token, account appears
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/verify?token={}", events[0].token))
        .to_request();
    let profile: UserProfile = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.role, UserRole::User);

    // The link is single-use
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/verify?token={}", events[0].token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Login
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "alice@example.com", "password": "correct horse"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let access_token = body["access_token"].as_str().unwrap().to_string();
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();
    assert_eq!(body["expires_in"], 900);
    assert_eq!(body["user"]["email"], "alice@example.com");

    // Refresh
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(json!({"refresh_token": refresh_token}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["access_token"].as_str().is_some());

    // Logout with the live session
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The session is gone: the same access token no longer admits
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // And the refresh id is an explicit invalid-token failure now
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(json!({"refresh_token": refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn signup_duplicate_email_conflicts_before_any_event() {
    let ctx = context();
    seed_user(&ctx, "alice@example.com", "correct horse", UserRole::User).await;
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "first_name": "Mallory",
            "last_name": "Jones",
            "email": "alice@example.com",
            "phone_number": "+61400000099",
            "password": "another pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert!(ctx.publisher.signup_events().await.is_empty());
}

#[actix_rt::test]
async fn signup_rejects_invalid_body() {
    let ctx = context();
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "first_name": "Alice",
            "last_name": "Smith",
            "email": "not-an-email",
            "phone_number": "+61400000000",
            "password": "correct horse"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn login_with_bad_credentials_is_unauthorized() {
    let ctx = context();
    seed_user(&ctx, "alice@example.com", "correct horse", UserRole::User).await;
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "alice@example.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn refresh_with_unknown_id_is_explicit_failure() {
    let ctx = context();
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(json!({"refresh_token": "never-issued"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn reset_flow_updates_credential() {
    let ctx = context();
    seed_user(&ctx, "alice@example.com", "old password", UserRole::User).await;
    let app = test::init_service(lf_api::app::create_app(ctx.state.clone())).await;

    // Unknown email is an explicit 404
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/reset")
        .set_json(json!({"email": "ghost@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Known email begins the workflow
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/reset")
        .set_json(json!({"email": "alice@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let events = ctx.publisher.reset_events().await;
    assert_eq!(events.len(), 1);

    // Confirm with the mailed token
    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/auth/reset/confirm?token={}",
            events[0].token
        ))
        .set_json(json!({"new_password": "brand new pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Old password is dead, new one logs in
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "alice@example.com", "password": "old password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "alice@example.com", "password": "brand new pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The reset token was consumed
    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/auth/reset/confirm?token={}",
            events[0].token
        ))
        .set_json(json!({"new_password": "yet another"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
