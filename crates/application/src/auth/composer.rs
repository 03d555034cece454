//! Client Parameter Composer
//!
//! The single place where "where do the real credentials come from" and
//! "which connection form wins" are decided. Produces one immutable
//! [`ClientParams`] per call, or a descriptive error.

use nacos_auth_domain::auth::{
    AuthError, AuthReference, ClientAuthInfo, ClientParams, ServerLocator, ServerParams,
};
use tracing::{debug, warn};

use super::resolver::AuthResolver;

/// Composes the final connection parameters from a reference and hints
pub struct ClientParamsComposer {
    resolver: AuthResolver,
}

impl ClientParamsComposer {
    /// Creates a composer dispatching references through `resolver`
    pub fn new(resolver: AuthResolver) -> Self {
        Self { resolver }
    }

    /// Decides the connection parameters for one client
    ///
    /// When a reference is supplied it is re-targeted at the hints'
    /// namespace (the caller's value is never mutated) and resolved into
    /// credential material; without a reference the credentials are empty.
    /// The endpoint hint takes strict precedence over the server address
    /// hint; with neither provided the composition fails.
    ///
    /// At most one store read happens per call, and only when a reference
    /// was supplied. No writes, no retries, no caching.
    ///
    /// # Errors
    ///
    /// Resolver failures pass through unmasked; the only error originating
    /// here is `AuthError::InsufficientConnectionParameters`.
    pub async fn compose(
        &self,
        auth_ref: Option<&AuthReference>,
        hints: &ServerParams,
    ) -> Result<ClientParams, AuthError> {
        let auth = match auth_ref {
            Some(reference) => {
                let reference = reference.with_namespace(hints.namespace());
                self.resolver.resolve(&reference).await?
            }
            None => ClientAuthInfo::default(),
        };

        if let Some(endpoint) = hints.endpoint() {
            debug!(endpoint, namespace = %hints.namespace(), "Composed endpoint client parameters");
            return Ok(ClientParams::new(
                ServerLocator::Endpoint(endpoint.to_string()),
                hints.namespace(),
                auth,
            ));
        }

        if let Some(server_addr) = hints.server_addr() {
            debug!(server_addr, namespace = %hints.namespace(), "Composed server-addr client parameters");
            return Ok(ClientParams::new(
                ServerLocator::ServerAddr(server_addr.to_string()),
                hints.namespace(),
                auth,
            ));
        }

        warn!("Neither an endpoint nor a server address hint was provided");
        Err(AuthError::InsufficientConnectionParameters)
    }
}
