//! Server configuration.
//!
//! Configuration is read once at startup and handed down explicitly;
//! nothing in this crate consults the environment after boot, and
//! nothing holds configuration in a module-level global.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::telemetry::LogFormat;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur while reading configuration.
///
/// Missing variables fall back to defaults; variables that are present
/// but malformed are startup errors rather than silent fallbacks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` held something other than a decimal port number.
    #[error("Invalid PORT value: '{0}'. Expected a decimal port number")]
    InvalidPort(String),

    /// `LOG_FORMAT` held an unsupported value.
    #[error("{0}")]
    InvalidLogFormat(String),

    /// `HOST` and `PORT` did not combine into a socket address.
    #[error("Invalid server address '{0}'")]
    InvalidAddress(String),
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: bind host (default `0.0.0.0`)
    /// - `PORT`: listen port (default `8080`)
    /// - `LOG_FORMAT`: `compact` (default) | `json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a decimal port number
    /// or `LOG_FORMAT` names an unsupported format.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            Err(_) => DEFAULT_PORT,
        };

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidLogFormat)?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] when the configured host
    /// does not combine with the port into a parseable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(address))
    }
}

// =============================================================================
// Tests
// =============================================================================
