//! Auth Extractor Trait
//!
//! Defines the abstraction for kind-specific credential extraction.
//! One implementation exists per reference kind; resolution dispatches on
//! the kind and never needs to know how a given backend stores its fields.

use async_trait::async_trait;

use super::error::AuthError;
use super::params::ClientAuthInfo;
use super::reference::ReferenceKind;

/// Trait for kind-specific credential extractors
///
/// Implementations must be thread-safe (Send + Sync). Adding support for a
/// new reference kind means adding one implementation and registering it;
/// nothing else changes.
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl AuthExtractor for MyExtractor {
///     fn kind(&self) -> ReferenceKind { ReferenceKind::new("ConfigMap") }
///
///     async fn extract(&self, namespace: &str, name: &str)
///         -> Result<ClientAuthInfo, AuthError> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait AuthExtractor: Send + Sync {
    /// The reference kind this extractor serves
    fn kind(&self) -> ReferenceKind;

    /// Extracts whatever auth fields the object at namespace/name carries
    ///
    /// A missing backing object is not an error: implementations return an
    /// empty [`ClientAuthInfo`] so callers can reference optional credential
    /// objects without special-casing absence.
    ///
    /// # Errors
    ///
    /// - `AuthError::StoreAccess` for any store failure other than not-found
    async fn extract(&self, namespace: &str, name: &str) -> Result<ClientAuthInfo, AuthError>;
}
