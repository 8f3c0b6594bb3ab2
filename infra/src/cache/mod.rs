//! Redis cache client and the token store implementation.

pub mod redis_client;
pub mod token_store;

pub use redis_client::RedisClient;
pub use token_store::RedisTokenStore;
