//! Error type for calls to the remote bookings API.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported to the user as a transient notification and the
//! session is left untouched, so the variants only need to carry enough to
//! log the cause and pick a message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected data format: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, keeping the server's `message` when the body has one.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// Text for the notification: the server's explanation when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ if self.is_unauthorized() => SESSION_EXPIRED_MESSAGE.to_owned(),
            _ => fallback.to_owned(),
        }
    }

    /// True when the API rejected the session credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
