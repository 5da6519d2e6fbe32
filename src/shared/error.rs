//! Shared Error Types
//!
//! This module defines the error type returned by the HTTP client and the
//! session token store.
//!
//! # Error Categories
//!
//! - `Network` - the server could not be reached
//! - `Rejected` - the server answered with a non-success status
//! - `Decode` - a success response carried an unexpected body
//! - `Runtime` - the async runtime for a request could not be built
//! - `Storage` - the session token could not be read or written
//!
//! # Usage
//!
//! ```rust
//! use cinerate::shared::error::ClientError;
//!
//! let error = ClientError::rejected(401, Some("Bad credentials".to_string()));
//! assert_eq!(error.user_message(), "Bad credentials");
//! ```
use thiserror::Error;

/// Shown when a login is refused and the server gave no reason
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

/// Shown when the server could not be reached at all
pub const NETWORK_FALLBACK_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Errors produced by the client side of the HTTP boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure before any response arrived
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Reason extracted from the response body, if any
        message: Option<String>,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// The per-request async runtime could not be created
    #[error("Failed to create runtime: {message}")]
    Runtime {
        /// Human-readable error message
        message: String,
    },

    /// Reading or writing the session token failed
    #[error("Token storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new rejection error
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new runtime error
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Text shown to the user under the login form
    ///
    /// A reason supplied by the server wins; otherwise a generic message is
    /// picked by error kind.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Network { .. } => NETWORK_FALLBACK_MESSAGE.to_string(),
            _ => LOGIN_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}
