//! User storage stand-ins.
//!
//! Durable relational storage is an external collaborator; this module
//! only provides the in-memory repository used for development and the
//! reference server.

pub mod memory;

pub use memory::InMemoryUserRepository;
