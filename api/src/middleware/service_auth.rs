//! Service-local admission filter.
//!
//! Defense-in-depth re-validation inside each backend service: verifies
//! signature and expiry only, with no token store dependency, and
//! reconstructs the [`Principal`] from the claims alone. Tolerates
//! store unavailability by construction. Fail-open like the gateway;
//! route guards own the terminal decision.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
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
use lf_core::services::token::JwtCodec;

use super::extract_bearer_token;

/// Service-local admission filter factory
pub struct ServiceAuth {
    codec: Arc<JwtCodec>,
}

impl ServiceAuth {
    /// Creates the filter over the shared verifier
    pub fn new(codec: Arc<JwtCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ServiceAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ServiceAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ServiceAuthMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
        }))
    }
}

/// Service-local admission filter service
pub struct ServiceAuthMiddleware<S> {
    service: Rc<S>,
    codec: Arc<JwtCodec>,
}

impl<S, B> Service<ServiceRequest> for ServiceAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = Arc::clone(&self.codec);

        Box::pin(async move {
            if let Some(token) = extract_bearer_token(&req) {
                match codec.verify(&token) {
                    Ok(claims) => {
                        debug!("verified '{}' as {} on {}", claims.sub, claims.role, req.path());
                        req.extensions_mut().insert(Principal::from_claims(&claims));
                    }
                    Err(e) => {
                        warn!("invalid token at service filter on {}: {}", req.path(), e);
                    }
                }
            }

            service.call(req).await
        })
    }
}
