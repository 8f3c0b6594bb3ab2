//! Mail event stream configuration

use serde::{Deserialize, Serialize};

/// Stream names for asynchronous mail events
///
/// The mail worker consumes these streams and sends the actual
/// verification / reset emails; this side only publishes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Stream carrying signup verification events
    pub verification_stream: String,

    /// Stream carrying password reset events
    pub reset_stream: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            verification_stream: String::from("mail.verification"),
            reset_stream: String::from("mail.reset"),
        }
    }
}

impl QueueConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let verification_stream = std::env::var("MAIL_VERIFICATION_STREAM")
            .unwrap_or_else(|_| "mail.verification".to_string());
        let reset_stream =
            std::env::var("MAIL_RESET_STREAM").unwrap_or_else(|_| "mail.reset".to_string());

        Self {
            verification_stream,
            reset_stream,
        }
    }
}
