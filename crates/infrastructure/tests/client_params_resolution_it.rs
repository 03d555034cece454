//! Integration tests for end-to-end client parameter resolution
//!
//! Wires the real composer, resolver and Secret extractor against the
//! in-memory object store and walks the full decision surface: reference
//! kinds, credential extraction, address precedence and the error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use nacos_auth_application::auth::{
    AuthResolver, ClientParamsComposer, SecretAuthExtractor, auth_reference_from_config,
    server_params_from_config,
};
use nacos_auth_domain::auth::{AuthError, AuthReference, ReferenceKind, ServerParams};
use nacos_auth_domain::store::{ObjectStore, StoreError, StoredObject};
use nacos_auth_infrastructure::store::InMemoryObjectStore;
use nacos_auth_shared::config::NacosServerConfig;

fn object(fields: &[(&str, &str)]) -> StoredObject {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
        .collect()
}

fn composer_over(store: Arc<dyn ObjectStore>) -> ClientParamsComposer {
    let resolver = AuthResolver::new().with_extractor(Arc::new(SecretAuthExtractor::new(store)));
    ClientParamsComposer::new(resolver)
}

#[tokio::test]
async fn test_endpoint_without_reference() {
    let composer = composer_over(Arc::new(InMemoryObjectStore::new()));
    let hints = ServerParams::new("ns1").with_endpoint("nacos.example.com:8848");

    let params = composer.compose(None, &hints).await.unwrap();

    assert_eq!(params.endpoint(), Some("nacos.example.com:8848"));
    assert_eq!(params.server_addr(), None);
    assert_eq!(params.namespace(), "ns1");
    assert!(params.auth().is_empty());
}

#[tokio::test]
async fn test_server_addr_with_partially_populated_secret() {
    let store = InMemoryObjectStore::new();
    store
        .insert(
            "ns2",
            "creds",
            object(&[("accessKey", "AK"), ("password", "pw")]),
        )
        .await;
    let composer = composer_over(Arc::new(store));

    // The reference points at namespace "old"; resolution re-targets it at
    // the hints' namespace, where the object actually lives.
    let reference = AuthReference::secret("old", "creds");
    let hints = ServerParams::new("ns2").with_server_addr("1.2.3.4:8848");

    let params = composer.compose(Some(&reference), &hints).await.unwrap();

    assert_eq!(params.server_addr(), Some("1.2.3.4:8848"));
    assert_eq!(params.endpoint(), None);
    assert_eq!(params.namespace(), "ns2");
    assert_eq!(params.auth().access_key, "AK");
    assert_eq!(params.auth().secret_key, "");
    assert_eq!(params.auth().username, "");
    assert_eq!(params.auth().password, "pw");
    // The caller's reference still points where it did before.
    assert_eq!(reference.namespace(), "old");
}

#[tokio::test]
async fn test_missing_secret_resolves_to_empty_credentials() {
    let composer = composer_over(Arc::new(InMemoryObjectStore::new()));

    let reference = AuthReference::secret("ns", "missing");
    let hints = ServerParams::new("ns").with_endpoint("e:8848");

    let params = composer.compose(Some(&reference), &hints).await.unwrap();

    assert_eq!(params.endpoint(), Some("e:8848"));
    assert_eq!(params.namespace(), "ns");
    assert!(params.auth().is_empty());
}

#[tokio::test]
async fn test_unsupported_reference_kind() {
    let composer = composer_over(Arc::new(InMemoryObjectStore::new()));

    let reference = AuthReference::new(ReferenceKind::new("ConfigMap"), "ns", "creds");
    let hints = ServerParams::new("ns").with_endpoint("e:8848");

    let err = composer.compose(Some(&reference), &hints).await.unwrap_err();
    assert!(matches!(err, AuthError::UnsupportedReferenceKind { .. }));
    assert!(err.to_string().contains("ConfigMap"));
}

#[tokio::test]
async fn test_no_addresses_is_insufficient() {
    let composer = composer_over(Arc::new(InMemoryObjectStore::new()));

    let err = composer
        .compose(None, &ServerParams::new("ns"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InsufficientConnectionParameters));
}

/// Store that fails every fetch with the configured error
struct BrokenStore(StoreError);

#[async_trait]
impl ObjectStore for BrokenStore {
    fn name(&self) -> &str {
        "broken"
    }

    async fn fetch(
        &self,
        _namespace: &str,
        _name: &str,
    ) -> Result<Option<StoredObject>, StoreError> {
        Err(self.0.clone())
    }
}

#[tokio::test]
async fn test_not_found_and_store_failure_are_not_the_same_thing() {
    // Not-found resolves successfully with empty credentials...
    let composer = composer_over(Arc::new(InMemoryObjectStore::new()));
    let reference = AuthReference::secret("ns", "absent");
    let hints = ServerParams::new("ns").with_endpoint("e:8848");
    let params = composer.compose(Some(&reference), &hints).await.unwrap();
    assert!(params.auth().is_empty());

    // ...while any other store failure surfaces unchanged.
    let composer = composer_over(Arc::new(BrokenStore(StoreError::access_denied(
        "secrets \"absent\" is forbidden",
    ))));
    let err = composer.compose(Some(&reference), &hints).await.unwrap_err();
    assert!(matches!(err, AuthError::StoreAccess(_)));
    assert!(err.to_string().contains("forbidden"));
}

#[tokio::test]
async fn test_full_flow_from_configuration() {
    let store = InMemoryObjectStore::new();
    store
        .insert("prod", "nacos-creds", object(&[("username", "nacos"), ("password", "pw")]))
        .await;
    let composer = composer_over(Arc::new(store));

    let config = NacosServerConfig::default()
        .with_server_addr("1.2.3.4:8848")
        .with_namespace("prod")
        .with_auth_secret("nacos-creds");

    let reference = auth_reference_from_config(&config);
    let hints = server_params_from_config(&config);
    let params = composer
        .compose(reference.as_ref(), &hints)
        .await
        .unwrap();

    assert_eq!(params.server_addr(), Some("1.2.3.4:8848"));
    assert_eq!(params.namespace(), "prod");
    assert_eq!(params.auth().username, "nacos");
    assert_eq!(params.auth().password, "pw");
    assert_eq!(params.auth().access_key, "");
}
