//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is recovered where it happens and shown as a transient
//! message, so the `Display` text of each variant is exactly what the user
//! reads.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::MessageBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never completed (fetch rejected, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx body did not match the expected JSON shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Attend was requested without a logged-in session.
    #[error("Please log in to register for an event.")]
    NotLoggedIn,

    /// Credentials were accepted but the username lookup found no user.
    #[error("Login successful, but could not retrieve user data. Try refreshing.")]
    IdentityUnresolved,
}

impl ClientError {
    /// Build a `Rejected` error from a raw non-2xx body, using the body's
    /// `message` when present and `fallback` otherwise.
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Rejected { status, message }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
