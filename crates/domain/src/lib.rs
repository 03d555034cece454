// Nacos Auth - Domain Layer
// Bounded Contexts:
// - auth: credential references, extracted auth material, client parameters
// - store: namespace/name-keyed object store abstraction

pub mod auth;
pub mod store;

// Re-exports to ease use of the bounded contexts
pub use auth::*;
pub use store::*;
