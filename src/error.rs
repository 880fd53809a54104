//! Error types for the Ariomex client library.
//!
//! The client introduces exactly one failure kind: the request never produced
//! a response. Anything the server says, including its own error payloads and
//! non-2xx statuses, comes back as an ordinary response body.

use thiserror::Error;

/// The main error type for all Ariomex client operations.
#[derive(Error, Debug)]
pub enum AriomexError {
    /// Network-level failure: DNS, connection, timeout or redirect limit.
    #[error("Failed to send request: {message}")]
    Transport {
        /// Message of the underlying failure
        message: String,
    },
}

impl AriomexError {
    /// Create a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: cause.to_string(),
        }
    }

    /// Check if this is a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The underlying failure message.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message } => message,
        }
    }
}

impl From<reqwest::Error> for AriomexError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

impl From<reqwest_middleware::Error> for AriomexError {
    fn from(err: reqwest_middleware::Error) -> Self {
        Self::transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let error = AriomexError::transport("connection refused");
        assert_eq!(error.to_string(), "Failed to send request: connection refused");
        assert_eq!(error.message(), "connection refused");
        assert!(error.is_transport());
    }
}
