//! Connection parameter types
//!
//! Caller-supplied hints ([`ServerParams`]), extracted auth material
//! ([`ClientAuthInfo`]) and the resolved, ready-to-use connection descriptor
//! ([`ClientParams`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied connection hints for one Nacos server
///
/// Both address fields exist because two addressing schemes are supported:
/// an addressing-server endpoint and a direct server address list. At most
/// one of them is expected to be meaningful; empty strings read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerParams {
    endpoint: Option<String>,
    server_addr: Option<String>,
    namespace: String,
}

impl ServerParams {
    /// Creates hints for the given Nacos namespace, with no addresses set
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            endpoint: None,
            server_addr: None,
            namespace: namespace.into(),
        }
    }

    /// Sets the addressing-server endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the direct server address
    pub fn with_server_addr(mut self, server_addr: impl Into<String>) -> Self {
        self.server_addr = Some(server_addr.into());
        self
    }

    /// Returns the endpoint hint, treating empty strings as absent
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns the server address hint, treating empty strings as absent
    pub fn server_addr(&self) -> Option<&str> {
        self.server_addr.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns the Nacos namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Auth fields extracted from a credential-bearing object
///
/// Each field is independently optional and defaults to empty. A value with
/// all fields empty is valid: it means the reference was absent or the
/// backing object carried nothing usable.
///
/// # Security
///
/// Debug output redacts non-empty values; field contents never reach logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientAuthInfo {
    pub access_key: String,
    pub secret_key: String,
    pub username: String,
    pub password: String,
}

impl ClientAuthInfo {
    /// Returns true if no auth field carries a value
    pub fn is_empty(&self) -> bool {
        self.access_key.is_empty()
            && self.secret_key.is_empty()
            && self.username.is_empty()
            && self.password.is_empty()
    }
}

impl fmt::Debug for ClientAuthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientAuthInfo")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("username", &redact(&self.username))
            .field("password", &redact(&self.password))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "[REDACTED]" }
}

/// Address form for reaching the server
///
/// Exactly one form is ever in play: either an addressing-server endpoint
/// or a direct server address list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerLocator {
    /// Addressing-server endpoint, e.g. "nacos.example.com:8848"
    Endpoint(String),
    /// Direct server address list, e.g. "1.2.3.4:8848"
    ServerAddr(String),
}

impl ServerLocator {
    /// Returns the address string regardless of form
    pub fn as_str(&self) -> &str {
        match self {
            Self::Endpoint(addr) | Self::ServerAddr(addr) => addr,
        }
    }
}

impl fmt::Display for ServerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(addr) => write!(f, "endpoint {addr}"),
            Self::ServerAddr(addr) => write!(f, "server-addr {addr}"),
        }
    }
}

/// The resolved, ready-to-use connection parameters for a Nacos client
///
/// Immutable once constructed. The locator guarantees exactly one address
/// form is populated: never both, never neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    locator: ServerLocator,
    namespace: String,
    auth: ClientAuthInfo,
}

impl ClientParams {
    /// Creates a new descriptor
    pub fn new(locator: ServerLocator, namespace: impl Into<String>, auth: ClientAuthInfo) -> Self {
        Self {
            locator,
            namespace: namespace.into(),
            auth,
        }
    }

    /// Returns the address form in play
    pub fn locator(&self) -> &ServerLocator {
        &self.locator
    }

    /// Returns the endpoint, if that is the form in play
    pub fn endpoint(&self) -> Option<&str> {
        match &self.locator {
            ServerLocator::Endpoint(addr) => Some(addr),
            ServerLocator::ServerAddr(_) => None,
        }
    }

    /// Returns the server address, if that is the form in play
    pub fn server_addr(&self) -> Option<&str> {
        match &self.locator {
            ServerLocator::ServerAddr(addr) => Some(addr),
            ServerLocator::Endpoint(_) => None,
        }
    }

    /// Returns the Nacos namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the auth material
    pub fn auth(&self) -> &ClientAuthInfo {
        &self.auth
    }
}
