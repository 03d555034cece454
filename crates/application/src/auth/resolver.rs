//! Auth Reference Resolver
//!
//! Holds the mapping from reference kinds to their extractors and dispatches
//! resolution requests. The registry is populated at construction time and
//! immutable afterwards; concurrent resolutions share it freely.

use std::collections::HashMap;
use std::sync::Arc;

use nacos_auth_domain::auth::{
    AuthError, AuthExtractor, AuthReference, ClientAuthInfo, ReferenceKind,
};
use tracing::{debug, warn};

/// Registry of kind-specific auth extractors
///
/// A reference whose kind has no registered extractor fails with
/// `AuthError::UnsupportedReferenceKind` without any backing-store traffic.
/// Supporting a new kind means registering one more extractor; nothing else
/// changes.
pub struct AuthResolver {
    extractors: HashMap<ReferenceKind, Arc<dyn AuthExtractor>>,
}

impl AuthResolver {
    /// Creates an empty resolver
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registers an extractor under the kind it serves
    ///
    /// Registering a second extractor for the same kind replaces the first.
    pub fn register(&mut self, extractor: Arc<dyn AuthExtractor>) {
        let kind = extractor.kind();
        debug!(kind = %kind, "Registered auth extractor");
        self.extractors.insert(kind, extractor);
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with_extractor(mut self, extractor: Arc<dyn AuthExtractor>) -> Self {
        self.register(extractor);
        self
    }

    /// Lists the reference kinds with a registered extractor
    pub fn supported_kinds(&self) -> Vec<ReferenceKind> {
        self.extractors.keys().cloned().collect()
    }

    /// Resolves a reference into its credential material
    pub async fn resolve(&self, reference: &AuthReference) -> Result<ClientAuthInfo, AuthError> {
        let Some(extractor) = self.extractors.get(reference.kind()) else {
            warn!(kind = %reference.kind(), "No extractor registered for reference kind");
            return Err(AuthError::unsupported_kind(reference.kind()));
        };

        debug!(
            kind = %reference.kind(),
            namespace = %reference.namespace(),
            name = %reference.name(),
            "Resolving auth reference"
        );
        extractor.extract(reference.namespace(), reference.name()).await
    }
}

impl Default for AuthResolver {
    fn default() -> Self {
        Self::new()
    }
}
