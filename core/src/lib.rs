//! # Learnify Core
//!
//! Core domain layer for the Learnify authentication fabric.
//! This crate contains domain entities, the token lifecycle services,
//! repository and store interfaces, and error types shared by the
//! gateway and the downstream services.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
