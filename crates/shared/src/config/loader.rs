//! Configuration loader
//!
//! This module provides the ConfigLoader which is responsible for loading
//! configuration from .env files and environment variables.

use std::path::Path;

use super::dto::NacosServerConfig;
use super::error::{ConfigError, Result};
use super::validator::validate_server_config;

/// Configuration loader
///
/// This loader handles loading configuration from:
/// 1. .env file (optional, highest priority)
/// 2. Environment variables
///
/// # Example
///
/// ```ignore
/// use nacos_auth_shared::config::ConfigLoader;
///
/// let loader = ConfigLoader::new(Some(".env".into()));
/// let config = loader.load_server_config()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Optional path to .env file
    env_file_path: Option<std::path::PathBuf>,
}

impl ConfigLoader {
    /// Create a new ConfigLoader
    ///
    /// If `env_file_path` is provided, the file is loaded before reading
    /// environment variables.
    pub fn new(env_file_path: Option<std::path::PathBuf>) -> Self {
        Self { env_file_path }
    }

    /// Load and validate the Nacos server configuration
    pub fn load_server_config(&self) -> Result<NacosServerConfig> {
        if let Some(path) = &self.env_file_path {
            self.load_env_file(path)?;
        }

        let config = NacosServerConfig::from_env()?;
        validate_server_config(&config)?;

        Ok(config)
    }

    /// Load .env file, making its variables available via `std::env::var`
    fn load_env_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ConfigError::EnvFileLoad {
                path: path.to_path_buf(),
                source: dotenv::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )),
            });
        }

        dotenv::from_path(path).map_err(|e| ConfigError::EnvFileLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}

impl Default for ConfigLoader {
    /// Create a ConfigLoader without .env file support
    fn default() -> Self {
        Self::new(None)
    }
}
