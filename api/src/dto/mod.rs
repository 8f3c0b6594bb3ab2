//! Request and response DTOs.

pub mod auth;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use lf_shared::types::response::ErrorResponse;

/// Turns field-level validation failures into a 400 response
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();

    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        format!("Invalid request data in field(s): {}", fields.join(", ")),
    ))
}
