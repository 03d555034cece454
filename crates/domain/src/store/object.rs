//! Stored objects and the fetch boundary
//!
//! [`StoredObject`] is the raw record a store hands back: a mapping from
//! field names to byte values, with no schema attached. [`ObjectStore`] is
//! the single operation this domain needs from any backend.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;

use super::error::StoreError;

/// Raw record fetched from an object store
///
/// Values may be credential material, so Debug shows field names only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoredObject {
    data: BTreeMap<String, Vec<u8>>,
}

impl StoredObject {
    /// Creates a record from a field-name → bytes mapping
    pub fn new(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Returns true if the record carries no fields
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw bytes of a field, if present
    pub fn field(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// UTF-8 view of a field
    ///
    /// Returns `None` when the field is absent or not valid UTF-8. The
    /// returned string may be empty; emptiness is the caller's call to make.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Iterates over the field names
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec<u8>)> for StoredObject {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for StoredObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredObject")
            .field("fields", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Trait for namespace/name-keyed object stores
///
/// Implementations must be thread-safe (Send + Sync). The store owns its
/// own timeout and cancellation discipline; callers add no policy on top.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Backend name, used for logging only
    fn name(&self) -> &str;

    /// Point lookup of one object
    ///
    /// Returns `Ok(None)` when the object does not exist; that is a normal
    /// outcome, not a failure. Every other problem is a [`StoreError`].
    async fn fetch(&self, namespace: &str, name: &str)
    -> Result<Option<StoredObject>, StoreError>;
}
