//! Shared configuration structures.
//!
//! Configuration is read once at startup. Missing or invalid required values
//! are returned as [`ConfigError`] so the process refuses to start.

use std::env;
use std::fmt;
use std::time::Duration;

use domain::MIN_JWT_SECRET_LENGTH;
use thiserror::Error;

/// Default maximum database pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default per-request deadline in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Startup configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} has an invalid value")]
    Invalid(&'static str),

    #[error("JWT_SECRET must be at least {min} bytes long")]
    SecretTooShort { min: usize },
}

/// Read a required variable, treating blank values as missing.
fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

/// Read an optional variable, falling back to `default` when unset.
fn parsed_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

// =============================================================================
// JWT
// =============================================================================

/// JWT configuration for token signing.
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    pub issuer: String,
    pub audience: String,
}

// Don't expose the secret in debug output (security)
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtConfig {
    /// Build a validated configuration.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort {
                min: MIN_JWT_SECRET_LENGTH,
            });
        }

        Ok(Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
        })
    }

    /// Load from `JWT_SECRET`, `JWT_ISSUER` and `JWT_AUDIENCE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = required(&lookup, "JWT_SECRET")?;
        let issuer = required(&lookup, "JWT_ISSUER")?;
        let audience = required(&lookup, "JWT_AUDIENCE")?;
        Self::new(secret, issuer, audience)
    }

    /// Get JWT secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

// =============================================================================
// Database
// =============================================================================

/// Database configuration.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = required(&lookup, "DATABASE_URL")?;
        let max_connections =
            parsed_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"));
        }

        Ok(Self {
            url,
            max_connections,
        })
    }
}

// =============================================================================
// Server
// =============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Deadline applied to every request
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ServerConfig {
    /// Load from `GATEWAY_HOST`, `GATEWAY_PORT` and `REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let timeout_ms = parsed_or(&lookup, "REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        Ok(Self {
            host: lookup("GATEWAY_HOST").unwrap_or(defaults.host),
            port: parsed_or(&lookup, "GATEWAY_PORT", defaults.port)?,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_jwt_config_loads() {
        let config = JwtConfig::from_lookup(source(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ISSUER", "users-api"),
            ("JWT_AUDIENCE", "users-clients"),
        ]))
        .unwrap();

        assert_eq!(config.issuer, "users-api");
        assert_eq!(config.audience, "users-clients");
        assert_eq!(config.secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = JwtConfig::from_lookup(source(&[
            ("JWT_ISSUER", "users-api"),
            ("JWT_AUDIENCE", "users-clients"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_short_secret_is_fatal() {
        let err = JwtConfig::new("x".repeat(31), "iss", "aud").unwrap_err();
        assert_eq!(err, ConfigError::SecretTooShort { min: 32 });
        assert!(JwtConfig::new("x".repeat(32), "iss", "aud").is_ok());
    }

    #[test]
    fn test_blank_issuer_is_missing() {
        let err = JwtConfig::from_lookup(source(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ISSUER", "  "),
            ("JWT_AUDIENCE", "users-clients"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_ISSUER"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new(SECRET, "iss", "aud").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains(SECRET));
        assert!(!ConfigError::SecretTooShort { min: 32 }.to_string().contains(SECRET));
    }

    #[test]
    fn test_database_config() {
        let config = DatabaseConfig::from_lookup(source(&[(
            "DATABASE_URL",
            "postgres://u:p@localhost/users",
        )]))
        .unwrap();
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!format!("{:?}", config).contains("u:p"));

        let err = DatabaseConfig::from_lookup(source(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = DatabaseConfig::from_lookup(source(&[
            ("DATABASE_URL", "postgres://localhost/users"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(source(&[("GATEWAY_PORT", "8080")])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
