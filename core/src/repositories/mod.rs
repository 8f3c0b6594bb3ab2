//! Repository and store interfaces consumed by the services.
//!
//! Implementations live in the infrastructure crate; in-memory versions
//! are provided here for tests and development.

pub mod token_store;
pub mod user;

pub use token_store::{MockTokenStore, TokenStore};
pub use user::{MockUserRepository, UserRepository};
