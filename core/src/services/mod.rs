//! Business services containing the token lifecycle and auth flows.

pub mod auth;
pub mod correlation;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher};
pub use correlation::{
    CorrelationService, EventPublisher, ResetEvent, SignupEvent, SignupPayload,
};
pub use token::{JwtCodec, TokenConfig, TokenService};
