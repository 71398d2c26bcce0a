//! Configuration management for the inbound submit handler.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read through `dotenvy` if present; nothing is printed to stdout,
//! which carries the status text.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Base URL used when `INBOUND_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for the inbound submit handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the `/inbound` path is joined onto
    pub base_url: String,

    /// HTTP request timeout in seconds (default: 0, meaning no timeout)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `INBOUND_BASE_URL`: Base URL of the inbound service (default: `http://localhost:3000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds, `0` disables it (default: 0)
    /// - `LOG_LEVEL`: Logging level used when `RUST_LOG` is unset (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let base_url =
            env::var("INBOUND_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "INBOUND_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 0)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            base_url,
            request_timeout,
            log_level,
        })
    }

    /// The configured request timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 0,
            log_level: "error".to_string(),
        }
    }
}
