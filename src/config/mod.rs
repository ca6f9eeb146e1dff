//! Configuration management for loanbook
//!
//! This module handles loading and validating configuration from environment
//! variables, with sensible defaults for local development.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// JWT secret for token signing.
    ///
    /// Falls back to an insecure default when `JWT_SECRET` is unset. This
    /// mirrors the behaviour of earlier deployments and must be overridden
    /// in any real environment.
    pub jwt_secret: String,

    /// Access token TTL in seconds (default: 3600 = 1 hour)
    pub token_ttl_seconds: i64,

    /// Path to the staff accounts JSON file
    pub staffs_file: PathBuf,

    /// Path to the loans JSON file
    pub loans_file: PathBuf,

    /// CORS allowed origins (permissive when unset)
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "your-secret-key".to_string());

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .unwrap_or(3600);

        let staffs_file = env::var("STAFFS_FILE")
            .unwrap_or_else(|_| "data/staffs.json".to_string())
            .into();

        let loans_file = env::var("LOANS_FILE")
            .unwrap_or_else(|_| "data/loans.json".to_string())
            .into();

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            port,
            jwt_secret,
            token_ttl_seconds,
            staffs_file,
            loans_file,
            cors_allowed_origins,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPort("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
