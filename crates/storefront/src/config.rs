//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the defaults run a local demo out of `./data`.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_DATA_DIR` - Blob store directory (default: ./data)
//! - `NURSERY_API_BASE_URL` - Placeholder backend base URL
//!   (default: http://localhost/api)
//! - `SHIPPING_FEE` - Flat shipping surcharge (default: 100)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_API_BASE_URL: &str = "http://localhost/api";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory for the file-backed blob store
    pub data_dir: PathBuf,
    /// Placeholder nursery backend configuration
    pub backend: BackendConfig,
    /// Flat shipping surcharge added to every invoice
    pub shipping_fee: Decimal,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Placeholder nursery backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL the stub endpoints hang off (e.g., http://localhost/api)
    pub base_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            backend: BackendConfig {
                base_url: DEFAULT_API_BASE_URL.to_owned(),
            },
            shipping_fee: Decimal::new(100, 0),
            sentry_dsn: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_env("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env("STOREFRONT_PORT", defaults.port)?;
        let shipping_fee = parse_env("SHIPPING_FEE", defaults.shipping_fee)?;

        let data_dir = match std::env::var("STOREFRONT_DATA_DIR") {
            Ok(value) => PathBuf::from(value),
            Err(_) => defaults.data_dir,
        };

        let base_url = match std::env::var("NURSERY_API_BASE_URL") {
            Ok(value) => {
                Url::parse(&value).map_err(|e| {
                    ConfigError::InvalidEnvVar("NURSERY_API_BASE_URL".to_owned(), e.to_string())
                })?;
                value
            }
            Err(_) => defaults.backend.base_url,
        };

        let sentry_dsn = std::env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            data_dir,
            backend: BackendConfig { base_url },
            shipping_fee,
            sentry_dsn,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse an environment variable, using `default` when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.backend.base_url, "http://localhost/api");
        assert_eq!(config.shipping_fee, Decimal::new(100, 0));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("GREENLIFE_TEST_UNSET_PORT", 3000).expect("default");
        assert_eq!(port, 3000);
    }
}
