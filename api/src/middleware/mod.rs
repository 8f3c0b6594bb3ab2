//! Request middleware: admission filters, authorization, CORS.

pub mod authorize;
pub mod cors;
pub mod gateway;
pub mod service_auth;

use actix_web::dev::ServiceRequest;
use actix_web::http::header::AUTHORIZATION;

/// Extracts the bearer token from the Authorization header
///
/// Any malformed header (missing, non-UTF-8, wrong scheme) reads as
/// "no token"; the admission filters treat that as an anonymous request.
pub(crate) fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
