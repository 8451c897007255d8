//! Client configuration loaded from environment variables.
//!
//! Configuration is read once at startup by the CLI binary; the library
//! itself takes credentials as plain constructor arguments and never touches
//! the environment.
//!
//! ## Variables
//!
//! - `SHORTLINK_BITLY_USERNAME` / `SHORTLINK_BITLY_PASSWORD` - Bitly
//!   credentials, required only when the Bitly provider is used
//! - `SHORTLINK_GOOGLE_API_KEY` - Google API key, optional
//! - `SHORTLINK_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)

use anyhow::{Context, Result, bail};
use std::env;

/// Settings for building provider clients from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bitly_username: Option<String>,
    pub bitly_password: Option<String>,
    pub google_api_key: Option<String>,
    /// Total per-request timeout applied by the default transport.
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORTLINK_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let request_timeout_secs = match env::var("SHORTLINK_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .context("SHORTLINK_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => 30,
        };

        Ok(Self {
            bitly_username: env::var("SHORTLINK_BITLY_USERNAME").ok(),
            bitly_password: env::var("SHORTLINK_BITLY_PASSWORD").ok(),
            google_api_key: env::var("SHORTLINK_GOOGLE_API_KEY").ok(),
            request_timeout_secs,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the Bitly credential pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either half is missing.
    pub fn bitly_credentials(&self) -> Result<(&str, &str)> {
        match (&self.bitly_username, &self.bitly_password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => bail!(
                "SHORTLINK_BITLY_USERNAME and SHORTLINK_BITLY_PASSWORD must be set \
                 to use the bitly provider"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitly_credentials_require_both_halves() {
        let config = Config {
            bitly_username: Some("user".to_string()),
            bitly_password: None,
            google_api_key: None,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        };

        assert!(config.bitly_credentials().is_err());
    }

    #[test]
    fn test_bitly_credentials_returns_pair() {
        let config = Config {
            bitly_username: Some("user".to_string()),
            bitly_password: Some("pass".to_string()),
            google_api_key: None,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        };

        assert_eq!(config.bitly_credentials().unwrap(), ("user", "pass"));
    }
}
