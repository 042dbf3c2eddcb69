//! Client configuration.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHIPSTATION_API_KEY` - API key (HTTP Basic username)
//! - `SHIPSTATION_API_SECRET` - API secret (HTTP Basic password)
//!
//! ## Optional
//! - `SHIPSTATION_DEBUG` - Log every request and response body (default: false)
//! - `SHIPSTATION_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `SHIPSTATION_BASE_URL` - API origin (default: <https://ssapi.shipstation.com>)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// ShipStation API origin.
pub const DEFAULT_BASE_URL: &str = "https://ssapi.shipstation.com";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration errors that can occur during construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing credential: {0} must be supplied")]
    MissingCredential(&'static str),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Credentials and transport settings shared by every request.
///
/// Implements `Debug` manually to redact the API secret.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key, sent as the Basic auth username
    pub api_key: String,
    /// API secret, sent as the Basic auth password
    pub api_secret: SecretString,
    /// API origin; request paths are appended to it
    pub base_url: Url,
    /// Log method, URL, status, and body of every exchange at `info`
    pub debug: bool,
    /// Applied to every request
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Build a configuration from an API key and secret.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if either value is missing or
    /// empty.
    pub fn new(api_key: Option<&str>, api_secret: Option<&str>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential("key"))?;
        let api_secret = api_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredential("secret"))?;

        Ok(Self {
            api_key: api_key.to_owned(),
            api_secret: SecretString::from(api_secret.to_owned()),
            base_url: default_base_url(),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a credential is missing or an optional
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var("SHIPSTATION_API_KEY").ok();
        let secret = std::env::var("SHIPSTATION_API_SECRET").ok();
        let mut config = Self::new(key.as_deref(), secret.as_deref())?;

        if let Ok(debug) = std::env::var("SHIPSTATION_DEBUG") {
            config.debug = parse_flag("SHIPSTATION_DEBUG", &debug)?;
        }

        if let Ok(timeout) = std::env::var("SHIPSTATION_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvVar("SHIPSTATION_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(base_url) = std::env::var("SHIPSTATION_BASE_URL") {
            config.base_url = Url::parse(&base_url).map_err(|e| {
                ConfigError::InvalidEnvVar("SHIPSTATION_BASE_URL".to_string(), e.to_string())
            })?;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Absolute URL for a request path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Invalid default base URL")
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_missing_credentials() {
        assert!(matches!(
            ClientConfig::new(None, Some("secret")),
            Err(ConfigError::MissingCredential("key"))
        ));
        assert!(matches!(
            ClientConfig::new(Some("key"), None),
            Err(ConfigError::MissingCredential("secret"))
        ));
        assert!(matches!(
            ClientConfig::new(Some(""), Some("secret")),
            Err(ConfigError::MissingCredential("key"))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(Some("key"), Some("secret")).unwrap();
        assert_eq!(config.api_secret.expose_secret(), "secret");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.debug);
        assert_eq!(config.endpoint("/carriers"), "https://ssapi.shipstation.com/carriers");
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new(Some("key"), Some("secret"))
            .unwrap()
            .with_debug(true)
            .with_timeout(Duration::from_secs(3))
            .with_base_url(Url::parse("http://localhost:8080/").unwrap());
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.endpoint("/stores"), "http://localhost:8080/stores");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new(Some("key"), Some("hunter2")).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
