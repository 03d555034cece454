//! Object store errors
//!
//! Not-found is absent on purpose: [`super::ObjectStore::fetch`] signals it
//! through its return type, so an error from a store always means the lookup
//! itself failed.

use thiserror::Error;

/// Errors an object store lookup can fail with
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Access to the object was denied
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    /// The store could not be reached or the request did not complete
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The store answered with something that could not be understood
    #[error("Malformed object: {message}")]
    Malformed { message: String },
}

impl StoreError {
    /// Creates an AccessDenied error
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a Malformed error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns true if this error is a transient failure worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
