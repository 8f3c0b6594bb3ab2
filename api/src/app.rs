//! Application factory
//!
//! Builds the actix-web application with both admission filters in
//! place: the gateway filter (verify + liveness) in front of the auth
//! scope, and the service-local filter (verify only) in front of the
//! users scope, standing in for a downstream service's own perimeter.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::middleware::cors::create_cors;
use crate::middleware::gateway::GatewayAuth;
use crate::middleware::service_auth::ServiceAuth;
use crate::routes::auth::{login, logout, refresh, reset, signup, verify, AppState};
use crate::routes::users;

use lf_core::repositories::token_store::TokenStore;
use lf_core::repositories::user::UserRepository;
use lf_core::services::auth::PasswordHasher;
use lf_core::services::correlation::EventPublisher;
use lf_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<U, S, P, H>(
    app_state: web::Data<AppState<U, S, P, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: TokenStore + 'static,
    P: EventPublisher + 'static,
    H: PasswordHasher + 'static,
{
    let gateway = GatewayAuth::new(Arc::clone(&app_state.token_service));
    let service_local = ServiceAuth::new(Arc::clone(&app_state.jwt_codec));

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Auth routes behind the gateway admission filter
                .service(
                    web::scope("/auth")
                        .wrap(gateway)
                        .route("/signup", web::post().to(signup::signup::<U, S, P, H>))
                        .route("/verify", web::get().to(verify::verify::<U, S, P, H>))
                        .route("/login", web::post().to(login::login::<U, S, P, H>))
                        .route("/refresh", web::post().to(refresh::refresh::<U, S, P, H>))
                        .route("/logout", web::post().to(logout::logout::<U, S, P, H>))
                        .route("/reset", web::post().to(reset::request_reset::<U, S, P, H>))
                        .route(
                            "/reset/confirm",
                            web::post().to(reset::confirm_reset::<U, S, P, H>),
                        ),
                )
                // User routes behind the service-local filter only,
                // the way a downstream service re-validates on its own
                .service(
                    web::scope("/users")
                        .wrap(service_local)
                        .route("/me", web::get().to(users::me)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "learnify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
