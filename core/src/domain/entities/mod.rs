//! Domain entities representing core business objects.

pub mod principal;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use principal::Principal;
pub use token::{Claims, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::{User, UserRole, UserStatus};
