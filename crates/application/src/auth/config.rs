//! Configuration glue
//!
//! Turns the environment-driven [`NacosServerConfig`] DTO into the domain
//! inputs the composer consumes.

use nacos_auth_domain::auth::{AuthReference, ServerParams};
use nacos_auth_shared::config::NacosServerConfig;

/// Builds connection hints from the loaded configuration
pub fn server_params_from_config(config: &NacosServerConfig) -> ServerParams {
    let mut hints = ServerParams::new(config.namespace.clone());
    if let Some(endpoint) = &config.endpoint {
        hints = hints.with_endpoint(endpoint.clone());
    }
    if let Some(server_addr) = &config.server_addr {
        hints = hints.with_server_addr(server_addr.clone());
    }
    hints
}

/// Builds the optional auth reference from the loaded configuration
///
/// The reference starts out in the configured namespace; composition
/// re-targets it anyway, so only the Secret name really matters here.
pub fn auth_reference_from_config(config: &NacosServerConfig) -> Option<AuthReference> {
    config
        .auth_secret
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(|name| AuthReference::secret(config.namespace.clone(), name))
}
