//! In-Memory Object Store
//!
//! Process-local store keyed by namespace/name. Backs the integration tests
//! and local development setups where no Kubernetes API is around.

use std::collections::HashMap;

use async_trait::async_trait;
use nacos_auth_domain::store::{ObjectStore, StoreError, StoredObject};
use tokio::sync::RwLock;

/// Object store over a process-local map
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl InMemoryObjectStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an object
    pub async fn insert(
        &self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        object: StoredObject,
    ) {
        let mut objects = self.objects.write().await;
        objects.insert((namespace.into(), name.into()), object);
    }

    /// Removes an object, returning it if it was present
    pub async fn remove(&self, namespace: &str, name: &str) -> Option<StoredObject> {
        let mut objects = self.objects.write().await;
        objects.remove(&(namespace.to_string(), name.to_string()))
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<StoredObject>, StoreError> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }
}
