//! Configuration management for the courrier client.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default attachment size limit: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Configuration for the courrier client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the correspondence API
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Number of most-recent courriers on the dashboard (default: 5)
    pub recent_courriers: usize,

    /// Maximum accepted attachment size in bytes (default: 10 MiB)
    pub max_upload_bytes: u64,

    /// Whether the dashboard "current period" is resolved in UTC rather
    /// than local wall-clock time (default: false, local time)
    pub period_in_utc: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `COURRIER_API_BASE_URL`: Base URL for the correspondence API
    ///
    /// Optional:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `RECENT_COURRIERS`: dashboard most-recent-N (default: 5)
    /// - `MAX_UPLOAD_BYTES`: attachment size limit (default: 10485760)
    /// - `PERIOD_IN_UTC`: "true"/"false" (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Seed from .env if present, without failing when it is absent
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("COURRIER_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("COURRIER_API_BASE_URL".to_string()))?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "COURRIER_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let recent_courriers = Self::parse_env_usize("RECENT_COURRIERS", 5)?;
        let max_upload_bytes = Self::parse_env_u64("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;
        let period_in_utc = Self::parse_env_bool("PERIOD_IN_UTC", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            recent_courriers,
            max_upload_bytes,
            period_in_utc,
            log_level,
        })
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be true or false, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            request_timeout: 10,
            recent_courriers: 5,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            period_in_utc: false,
            log_level: "error".to_string(),
        }
    }
}
