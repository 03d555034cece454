//! Object Store Abstraction
//!
//! A minimal namespace/name-keyed fetch boundary. The auth context reads
//! credential-bearing objects through this seam, so backends (Kubernetes,
//! in-memory, later a vault) stay interchangeable.

mod error;
mod object;

pub use error::StoreError;
pub use object::{ObjectStore, StoredObject};
