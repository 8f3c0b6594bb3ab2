//! Outbound mail event publication.

pub mod mail_stream;

pub use mail_stream::RedisMailQueue;
