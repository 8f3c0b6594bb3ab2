//! Correlation-token workflow
//!
//! Bridges synchronous HTTP requests to asynchronous mail delivery:
//! a random single-use token is bound to a pending action (signup
//! payload or reset target), stored with a short TTL, and later
//! redeemed exactly once.

mod config;
mod service;
mod traits;
mod types;

pub mod mock;

#[cfg(test)]
mod tests;

pub use config::CorrelationConfig;
pub use mock::MockEventPublisher;
pub use service::{CorrelationService, RESET_KEY_PREFIX, SIGNUP_KEY_PREFIX};
pub use traits::EventPublisher;
pub use types::{ResetEvent, SignupEvent, SignupPayload};
