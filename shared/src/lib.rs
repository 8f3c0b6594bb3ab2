//! Shared utilities and common types for the Learnify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Common response structures
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{CacheConfig, Environment, JwtConfig, QueueConfig, ServerConfig};
pub use types::response::{ErrorResponse, MessageResponse};
