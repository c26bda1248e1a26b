//! Gateway configuration.

use common::{ConfigError, DatabaseConfig, JwtConfig, ServerConfig};

/// Everything the process needs at startup, loaded once and read-only after.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails if the signing secret, issuer, audience or database URL is
    /// missing, or the secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
        })
    }
}
