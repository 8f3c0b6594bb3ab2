//! Gateway admission filter.
//!
//! Perimeter middleware intercepting every inbound request: it extracts
//! the bearer token, verifies signature and expiry, cross-checks the
//! subject against the live refresh sessions in the token store, and
//! only then attaches a verified [`Principal`] to the request.
//!
//! The filter is fail-open on token grounds: a missing, malformed,
//! expired, or orphaned token forwards the request unauthenticated and
//! leaves the terminal 401/403 to the per-route guards. A token store
//! fault is different: that aborts with a retryable 503 instead of
//! silently passing the liveness gate.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::{debug, warn};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use lf_core::domain::entities::principal::Principal;
use lf_core::errors::DomainError;
use lf_core::repositories::token_store::TokenStore;
use lf_core::services::token::TokenService;
use lf_shared::types::response::ErrorResponse;

use super::extract_bearer_token;

/// Gateway admission filter factory
pub struct GatewayAuth<T: TokenStore> {
    token_service: Arc<TokenService<T>>,
}

impl<T: TokenStore> GatewayAuth<T> {
    /// Creates the filter over the shared token service
    pub fn new(token_service: Arc<TokenService<T>>) -> Self {
        Self { token_service }
    }
}

impl<S, B, T> Transform<S, ServiceRequest> for GatewayAuth<T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TokenStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GatewayAuthMiddleware<S, T>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GatewayAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Gateway admission filter service
pub struct GatewayAuthMiddleware<S, T: TokenStore> {
    service: Rc<S>,
    token_service: Arc<TokenService<T>>,
}

impl<S, B, T> Service<ServiceRequest> for GatewayAuthMiddleware<S, T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: TokenStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            // Gate 1: header. No bearer token means anonymous.
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    debug!("no bearer token on {}", req.path());
                    return forward(service, req).await;
                }
            };

            // Gate 2: signature and expiry. Invalid reads as anonymous.
            let claims = match token_service.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    warn!("invalid or expired access token on {}: {}", req.path(), e);
                    return forward(service, req).await;
                }
            };

            // Gate 3: liveness. The subject must hold at least one live
            // refresh session; a revoked session orphans even a
            // still-valid access token.
            match token_service.has_live_session(&claims.sub).await {
                Ok(true) => {
                    debug!("authenticated '{}' as {} on {}", claims.sub, claims.role, req.path());
                    req.extensions_mut().insert(Principal::from_claims(&claims));
                }
                Ok(false) => {
                    warn!("no live refresh session for '{}' on {}", claims.sub, req.path());
                }
                Err(DomainError::Store { message }) => {
                    // Infrastructure fault, not a token verdict: never
                    // fail open past the liveness gate.
                    warn!("token store unavailable during liveness gate: {}", message);
                    let response = HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                        "store_unavailable",
                        "Token store unavailable, retry later",
                    ));
                    return Ok(req.into_response(response).map_into_right_body());
                }
                Err(e) => {
                    let response = HttpResponse::InternalServerError()
                        .json(ErrorResponse::new("internal_error", e.to_string()));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            forward(service, req).await
        })
    }
}

/// Continues the chain, mapping the inner body into the left variant
async fn forward<S, B>(
    service: Rc<S>,
    req: ServiceRequest,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    service.call(req).await.map(|res| res.map_into_left_body())
}
