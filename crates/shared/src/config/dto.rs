//! Configuration DTOs
//!
//! Immutable data transfer objects describing how to reach a Nacos server
//! and where its auth credentials live. Built once from the environment and
//! handed to the resolution services unchanged.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Connection-parameter hints for one Nacos server, as configured by the
/// operator of this process.
///
/// Both address forms exist because two addressing schemes are supported:
/// an addressing-server endpoint and a direct server address list. At most
/// one of them is expected to be meaningful; the parameter composer decides
/// which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NacosServerConfig {
    /// Addressing-server endpoint, e.g. "nacos.example.com:8848"
    pub endpoint: Option<String>,
    /// Direct server address list, e.g. "1.2.3.4:8848,5.6.7.8:8848"
    pub server_addr: Option<String>,
    /// Nacos namespace; empty means the public namespace
    pub namespace: String,
    /// Name of the Secret holding auth credentials, if any
    pub auth_secret: Option<String>,
}

impl NacosServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// Unset and empty variables read as absent; nothing is required at this
    /// stage. Sufficiency of the address hints is decided by the parameter
    /// composer, not here.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint: optional_var("NACOS_ENDPOINT"),
            server_addr: optional_var("NACOS_SERVER_ADDR"),
            namespace: optional_var("NACOS_NAMESPACE").unwrap_or_default(),
            auth_secret: optional_var("NACOS_AUTH_SECRET"),
        })
    }

    /// Sets the addressing-server endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the direct server address list
    pub fn with_server_addr(mut self, server_addr: impl Into<String>) -> Self {
        self.server_addr = Some(server_addr.into());
        self
    }

    /// Sets the Nacos namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the auth Secret name
    pub fn with_auth_secret(mut self, name: impl Into<String>) -> Self {
        self.auth_secret = Some(name.into());
        self
    }
}

/// Read an environment variable, treating unset and empty as absent
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
