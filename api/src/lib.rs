//! # Learnify API
//!
//! Reference actix-web server wiring the authentication fabric together:
//! the gateway admission filter, the service-local admission filter,
//! role-based route authorization, and the auth route handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
