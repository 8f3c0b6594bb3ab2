//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic email shape check: local part, one `@`, domain with a dot.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Validate an email address format
///
/// This is a format check only; proof of mailbox ownership comes from
/// the signup verification round trip.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
