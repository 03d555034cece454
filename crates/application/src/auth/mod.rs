//! Auth Application Services
//!
//! Provides the services that turn a credential reference plus connection
//! hints into ready-to-use Nacos client parameters:
//!
//! - `AuthResolver`: dispatches references to kind-specific extractors
//! - `SecretAuthExtractor`: Secret-kind extraction through an object store
//! - `ClientParamsComposer`: decides the final connection descriptor
//!
//! # Example
//!
//! ```ignore
//! let resolver = AuthResolver::new()
//!     .with_extractor(Arc::new(SecretAuthExtractor::new(store)));
//! let composer = ClientParamsComposer::new(resolver);
//!
//! let params = composer.compose(auth_ref.as_ref(), &hints).await?;
//! ```

mod composer;
mod config;
mod resolver;
mod secret;

pub use composer::ClientParamsComposer;
pub use config::{auth_reference_from_config, server_params_from_config};
pub use resolver::AuthResolver;
pub use secret::SecretAuthExtractor;
