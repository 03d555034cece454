//! Configuration module for Nacos connection resolution
//!
//! Provides centralized configuration loading, validation, and the DTO that
//! carries the caller-supplied connection hints into the resolution services.
//!
//! # Architecture
//!
//! 1. **Single Source of Truth**: configuration is loaded once at startup
//! 2. **Fail Fast**: malformed values are reported immediately
//! 3. **DTO Pattern**: configuration is immutable and passed by value
//! 4. **Env File Priority**: `.env` file > environment variables
//!
//! # Environment Variables
//!
//! All variables are optional at load time; which combinations are
//! sufficient to open a connection is decided later, by the parameter
//! composer.
//!
//! - `NACOS_ENDPOINT`: addressing-server endpoint (e.g., "nacos.example.com:8848")
//! - `NACOS_SERVER_ADDR`: direct server address list (e.g., "1.2.3.4:8848,5.6.7.8:8848")
//! - `NACOS_NAMESPACE`: Nacos namespace (default: "" — the public namespace)
//! - `NACOS_AUTH_SECRET`: name of the Secret holding auth credentials

pub mod dto;
pub mod error;
pub mod loader;
pub mod validator;

pub use dto::NacosServerConfig;
pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use validator::{validate_address, validate_server_config};
