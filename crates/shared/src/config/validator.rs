//! Configuration validation
//!
//! Syntax-level checks for the connection hints. Validation here only
//! rejects malformed values that were actually provided; whether the
//! provided combination is sufficient to open a connection is decided by
//! the parameter composer, which is the single authority for that rule.

use super::dto::NacosServerConfig;
use super::error::{ConfigError, Result};

/// Validate a Nacos server configuration
///
/// Checks the syntax of any address that was provided. Absent addresses are
/// accepted; `server_addr` may be a comma-separated list.
pub fn validate_server_config(config: &NacosServerConfig) -> Result<()> {
    if let Some(endpoint) = config.endpoint.as_deref().filter(|v| !v.is_empty()) {
        validate_address(endpoint)?;
    }

    if let Some(server_addr) = config.server_addr.as_deref().filter(|v| !v.is_empty()) {
        for addr in server_addr.split(',') {
            validate_address(addr)?;
        }
    }

    Ok(())
}

/// Validate a single "host" or "host:port" address
pub fn validate_address(addr: &str) -> Result<()> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Err(ConfigError::InvalidServerAddr(addr.to_string()));
    }

    if addr.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidServerAddr(addr.to_string()));
    }

    // Port is optional; when present it must be numeric and non-zero
    if let Some((host, port)) = addr.rsplit_once(':') {
        if host.is_empty() {
            return Err(ConfigError::InvalidServerAddr(addr.to_string()));
        }
        match port.parse::<u16>() {
            Ok(p) if p > 0 => {}
            _ => return Err(ConfigError::InvalidServerAddr(addr.to_string())),
        }
    }

    Ok(())
}
