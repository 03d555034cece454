//! Kubernetes Object Store
//!
//! Fetches Secrets through the Kubernetes API using kube-rs. The API's
//! own not-found handling maps straight onto the domain's `Ok(None)`;
//! authorization failures and transport problems become store errors.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use nacos_auth_domain::store::{ObjectStore, StoreError, StoredObject};
use tracing::debug;

/// Object store backed by Kubernetes Secrets
///
/// Timeouts and cancellation follow the client's configuration; no retry or
/// backoff policy is added here.
#[derive(Clone)]
pub struct KubernetesObjectStore {
    client: Client,
}

impl KubernetesObjectStore {
    /// Creates a store over an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects using the ambient kubeconfig or in-cluster configuration
    pub async fn try_default() -> Result<Self, StoreError> {
        let client = Client::try_default().await.map_err(|e| {
            StoreError::connection(format!("Failed to build Kubernetes client: {e}"))
        })?;
        Ok(Self::new(client))
    }

    /// Flattens a Secret's data map into a raw record
    fn object_from_secret(secret: Secret) -> StoredObject {
        secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect()
    }

    fn map_error(err: kube::Error) -> StoreError {
        match &err {
            kube::Error::Api(response) if response.code == 401 || response.code == 403 => {
                StoreError::access_denied(err.to_string())
            }
            _ => StoreError::connection(err.to_string()),
        }
    }
}

#[async_trait]
impl ObjectStore for KubernetesObjectStore {
    fn name(&self) -> &str {
        "kubernetes"
    }

    async fn fetch(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<StoredObject>, StoreError> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = secrets.get_opt(name).await.map_err(Self::map_error)?;

        debug!(
            namespace,
            name,
            found = secret.is_some(),
            "Fetched secret from Kubernetes"
        );
        Ok(secret.map(Self::object_from_secret))
    }
}
