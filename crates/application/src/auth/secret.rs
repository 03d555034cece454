//! Secret-kind Auth Extractor
//!
//! Reads the referenced Secret through the object store and copies the
//! recognized fields into a [`ClientAuthInfo`]. Extraction is field-by-field
//! and best-effort: unrecognized fields are ignored and missing fields never
//! cause failure.

use std::sync::Arc;

use async_trait::async_trait;
use nacos_auth_domain::auth::{AuthError, AuthExtractor, ClientAuthInfo, ReferenceKind};
use nacos_auth_domain::store::{ObjectStore, StoredObject};
use tracing::debug;

// Data keys recognized inside the referenced Secret. Exact and
// case-sensitive; anything else in the object is ignored.
const SECRET_AUTH_KEY_ACCESS_KEY: &str = "accessKey";
const SECRET_AUTH_KEY_SECRET_KEY: &str = "secretKey";
const SECRET_AUTH_KEY_USERNAME: &str = "username";
const SECRET_AUTH_KEY_PASSWORD: &str = "password";

/// Extractor for `Secret`-kind references
///
/// A referenced Secret that does not exist yields empty credentials, not an
/// error: callers may point at optional credential objects. Every other
/// store failure propagates unchanged.
pub struct SecretAuthExtractor {
    store: Arc<dyn ObjectStore>,
}

impl SecretAuthExtractor {
    /// Creates an extractor reading through the given store
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Copies the recognized fields out of a fetched record
    ///
    /// Each field is read independently: present and non-empty means the
    /// value is taken, anything else leaves the field at its default.
    fn auth_from_object(object: &StoredObject) -> ClientAuthInfo {
        let mut auth = ClientAuthInfo::default();
        if let Some(v) = non_empty_field(object, SECRET_AUTH_KEY_ACCESS_KEY) {
            auth.access_key = v.to_string();
        }
        if let Some(v) = non_empty_field(object, SECRET_AUTH_KEY_SECRET_KEY) {
            auth.secret_key = v.to_string();
        }
        if let Some(v) = non_empty_field(object, SECRET_AUTH_KEY_USERNAME) {
            auth.username = v.to_string();
        }
        if let Some(v) = non_empty_field(object, SECRET_AUTH_KEY_PASSWORD) {
            auth.password = v.to_string();
        }
        auth
    }
}

fn non_empty_field<'a>(object: &'a StoredObject, key: &str) -> Option<&'a str> {
    object.field_str(key).filter(|v| !v.is_empty())
}

#[async_trait]
impl AuthExtractor for SecretAuthExtractor {
    fn kind(&self) -> ReferenceKind {
        ReferenceKind::secret()
    }

    async fn extract(&self, namespace: &str, name: &str) -> Result<ClientAuthInfo, AuthError> {
        match self.store.fetch(namespace, name).await? {
            Some(object) => Ok(Self::auth_from_object(&object)),
            None => {
                debug!(
                    store = %self.store.name(),
                    namespace,
                    name,
                    "Auth secret not found, continuing with empty credentials"
                );
                Ok(ClientAuthInfo::default())
            }
        }
    }
}
