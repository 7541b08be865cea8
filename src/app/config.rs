//! Application configuration loaded from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use validator::Validate;

use crate::domain::ConfigError;
use crate::infra::database::validate_nonzero_timeout;
use crate::infra::{LogFormat, PoolConfig};

/// HTTP server settings.
#[derive(Debug, Clone, Validate)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    #[validate(custom(function = "validate_nonzero_timeout"))]
    pub request_timeout: Duration,
    #[validate(range(min = 1024))]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 64 * 1024,
        }
    }
}

/// Complete runtime configuration of the service.
#[derive(Debug, Validate)]
pub struct AppConfig {
    pub database_url: SecretString,
    #[validate(nested)]
    pub pool: PoolConfig,
    #[validate(nested)]
    pub server: ServerConfig,
    pub log_format: LogFormat,
    pub enable_metrics: bool,
    pub ensure_schema: bool,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; only `DATABASE_URL` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let pool_defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", pool_defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", pool_defaults.min_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                pool_defaults.acquire_timeout.as_secs(),
            )?),
            ..pool_defaults
        };

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            bind_addr: parse_or(&lookup, "BIND_ADDR", server_defaults.bind_addr)?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                server_defaults.request_timeout.as_secs(),
            )?),
            body_limit_bytes: parse_or(
                &lookup,
                "REQUEST_BODY_LIMIT_BYTES",
                server_defaults.body_limit_bytes,
            )?,
        };

        let config = Self {
            database_url: SecretString::from(database_url),
            pool,
            server,
            log_format: parse_or(&lookup, "LOG_FORMAT", LogFormat::default())?,
            enable_metrics: parse_or(&lookup, "ENABLE_METRICS", true)?,
            ensure_schema: parse_or(&lookup, "DB_ENSURE_SCHEMA", true)?,
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
