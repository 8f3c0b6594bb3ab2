//! User repository contract for the external relational collaborator.

#[path = "trait.rs"]
mod trait_;
pub mod r#trait {
    pub use super::trait_::*;
}

pub mod mock;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;

#[cfg(test)]
mod tests;
