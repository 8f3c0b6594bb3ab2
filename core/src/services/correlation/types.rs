//! Payload and event types for the correlation workflow

use serde::{Deserialize, Serialize};

/// Full pending registration, stored in the correlation entry
///
/// Storing the payload rather than a flag means the durable user record
/// is only created after proof of mailbox ownership; abandoned signups
/// are garbage-collected by TTL expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Plaintext password; hashed only at redemption time
    pub password: String,
}

/// Event published to the mail channel when a signup begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupEvent {
    pub email: String,
    pub token: String,
}

/// Event published to the mail channel when a reset begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetEvent {
    pub email: String,
    pub token: String,
}
