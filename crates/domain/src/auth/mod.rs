//! Auth Bounded Context - Nacos Client Credentials
//!
//! This module provides the types and contracts for resolving the
//! authentication material a Nacos client needs, starting from a reference
//! to a credential-bearing object.
//!
//! # Design Principles
//!
//! - **AuthReference**: typed pointer (kind + namespace + name) to the object
//!   holding credentials; never mutated during resolution
//! - **ClientAuthInfo**: the extracted auth fields, each independently
//!   optional; all-empty is a valid value, not an error
//! - **AuthExtractor**: trait for pluggable, kind-specific extraction; new
//!   reference kinds are additive
//! - **ClientParams**: the final, immutable connection descriptor
//!
//! # Security
//!
//! Extracted credential values are never logged: the Debug implementations
//! of [`ClientAuthInfo`] and [`ClientParams`] redact them.

mod error;
mod extractor;
mod params;
mod reference;

pub use error::AuthError;
pub use extractor::AuthExtractor;
pub use params::{ClientAuthInfo, ClientParams, ServerLocator, ServerParams};
pub use reference::{AuthReference, ReferenceKind};

#[cfg(test)]
mod tests;
