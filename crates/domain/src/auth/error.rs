//! Auth resolution errors
//!
//! Every failure a resolution can surface, with helper constructors and
//! retryability information. Absence is deliberately not represented here:
//! a missing backing object resolves to empty credentials, not an error.

use thiserror::Error;

use super::reference::ReferenceKind;
use crate::store::StoreError;

/// Errors that can occur while resolving client connection parameters
#[derive(Error, Debug)]
pub enum AuthError {
    /// The reference's kind has no registered extractor
    #[error("unsupported auth reference kind: {kind}")]
    UnsupportedReferenceKind { kind: ReferenceKind },

    /// The object store lookup failed for a reason other than not-found
    ///
    /// Propagated from the store unchanged, never interpreted here.
    #[error("credential store access failed: {0}")]
    StoreAccess(#[from] StoreError),

    /// Neither an endpoint nor a server address hint was provided
    #[error("either endpoint or server address must be set")]
    InsufficientConnectionParameters,
}

impl AuthError {
    /// Creates an UnsupportedReferenceKind error
    pub fn unsupported_kind(kind: &ReferenceKind) -> Self {
        Self::UnsupportedReferenceKind { kind: kind.clone() }
    }

    /// Returns true if retrying the resolution might succeed
    ///
    /// Only transient store failures are retryable; unsupported kinds and
    /// missing hints are caller-input problems.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::StoreAccess(err) => err.is_retryable(),
            Self::UnsupportedReferenceKind { .. } | Self::InsufficientConnectionParameters => false,
        }
    }
}
