//! Credential references
//!
//! A reference identifies where auth material can be fetched from without
//! carrying the material itself, so it is safe to log and to embed in
//! resource specs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator selecting which backing-object type an [`AuthReference`]
/// points to.
///
/// The kind space is open: a reference may carry any kind string, and
/// resolution reports kinds without a registered extractor instead of
/// guessing. `Secret` is the one kind shipped with a built-in extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceKind(String);

impl ReferenceKind {
    /// Creates a kind from its identifying string
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// The Kubernetes `Secret` kind
    pub fn secret() -> Self {
        Self("Secret".to_string())
    }

    /// Returns the identifying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a credential-bearing object, located by namespace and name
///
/// # Example
///
/// ```ignore
/// let reference = AuthReference::secret("nacos-system", "nacos-creds");
/// let relocated = reference.with_namespace("app-ns");
/// assert_eq!(reference.namespace(), "nacos-system"); // original untouched
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthReference {
    kind: ReferenceKind,
    namespace: String,
    name: String,
}

impl AuthReference {
    /// Creates a new reference
    pub fn new(
        kind: ReferenceKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a Secret-kind reference
    pub fn secret(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ReferenceKind::secret(), namespace, name)
    }

    /// Returns the reference kind
    pub fn kind(&self) -> &ReferenceKind {
        &self.kind
    }

    /// Returns the namespace the referenced object lives in
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the name of the referenced object
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this reference with the namespace replaced
    ///
    /// `self` is left untouched; resolution relocates references this way
    /// instead of mutating caller-supplied values.
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            kind: self.kind.clone(),
            namespace: namespace.into(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for AuthReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.kind, self.namespace, self.name)
    }
}
