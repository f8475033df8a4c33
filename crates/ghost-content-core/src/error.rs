//! Error types for Ghost Content operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias
//! used across all Ghost Content crates. Uses `thiserror` for derive
//! macros.

use thiserror::Error;

/// Errors that can occur in Ghost Content operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid tool or request parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP transport failure (request never produced a response).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response from the upstream Content API.
    #[error("Upstream API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream API.
        status: u16,
        /// Message extracted from the upstream error body.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid parameters error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind}: {id}"))
    }

    /// Create an HTTP transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an upstream API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// True if this error was raised before any request was sent.
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidParams(_) | Self::NotFound(_)
        )
    }
}

/// Result type alias using the Ghost Content `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
