//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CODIIT_API_BASE_URL` - Base URL of the CODI-IT REST API
//! - `CODIIT_API_TOKEN` - Bearer token for authenticated requests
//!
//! Environment loading honors a local `.env` file via `dotenvy`.

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the bearer token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the CODI-IT REST API.
    pub base_url: Url,
    /// Bearer token supplied by the session collaborator.
    pub api_token: SecretString,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"***")
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CODIIT_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            api_token: SecretString::from(api_token.into()),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors - optional for production)
        dotenvy::dotenv().ok();

        let base_url = require_env("CODIIT_API_BASE_URL")?;
        let api_token = require_env("CODIIT_API_TOKEN")?;

        Self::new(&base_url, api_token)
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_base_url() {
        let config = ClientConfig::new("https://api.codiit.example", "token").expect("valid");
        assert_eq!(config.base_url.as_str(), "https://api.codiit.example/");
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let err = ClientConfig::new("/users/me", "token").expect_err("relative");
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "CODIIT_API_BASE_URL"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("https://api.codiit.example", "super-secret").expect("valid");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
