//! Shared Error Types
//!
//! This module defines the error types produced while looking up a contact
//! and while reading or writing the durable key/value store.
//!
//! # Error Categories
//!
//! - `LookupError` - Anything that stops a `SearchContacts` call from producing data
//! - `StorageError` - Durable storage read/write failures
//!
//! Neither is ever fatal to the search widget: a `LookupError` becomes an
//! inline message, a `StorageError` is logged and the widget carries on with
//! its in-memory state.
//!
//! # Usage
//!
//! ```rust
//! use contact_lookup::shared::error::LookupError;
//!
//! let error = LookupError::api("rcFailed", "Session expired");
//! assert!(error.to_string().contains("Session expired"));
//! ```
use thiserror::Error;

/// Errors raised by the contact API client
#[derive(Debug, Error, Clone)]
pub enum LookupError {
    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("Request failed: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the status text when the body was unreadable
        body: String,
    },

    /// The CRM answered but reported a failed call
    #[error("API error {code}: {description}")]
    Api {
        /// Return code reported by the API (anything but `rcSuccess`)
        code: String,
        /// Description reported by the API
        description: String,
    },

    /// Request or response body could not be (de)serialized
    #[error("Failed to parse response: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// The async runtime backing a blocking call could not be started
    #[error("Failed to create runtime: {message}")]
    Runtime {
        /// Human-readable error message
        message: String,
    },
}

impl LookupError {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new API-level error
    pub fn api(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Errors raised by the durable key/value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
