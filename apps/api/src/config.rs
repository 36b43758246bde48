//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is deliberately little of it: the catalog is fixed and
//! the cart lives in memory, so host and port is all the server needs.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface the server binds to.
    pub host: String,

    /// HTTP server port.
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable      | Default     |
    /// |---------------|-------------|
    /// | `BASKET_HOST` | `0.0.0.0`   |
    /// | `BASKET_PORT` | `8080`      |
    pub fn load() -> Result<Self, ConfigError> {
        let host = env::var("BASKET_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("BASKET_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BASKET_PORT".to_string()))?;

        Ok(ApiConfig { host, port })
    }

    /// The socket address string the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
