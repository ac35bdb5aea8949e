use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::user::adapter::outgoing::jwt::JwtConfig;
use crate::user::application::domain::entities::DeleteStrategy;
use crate::user::application::ports::outgoing::ThrottlePolicy;

/// Variable lookup used by every config loader. Production code passes
/// `env_lookup`; tests pass a map.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

pub fn required(lookup: Lookup<'_>, key: &str) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

/// Parses `key` when present, otherwise returns `default`. A present but
/// unparsable value is an error rather than a silent fallback.
pub fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_file() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);

    if dotenvy::from_filename(&env_file).is_ok() {
        info!("loaded environment from {}", env_file);
    } else if dotenvy::dotenv().is_ok() {
        info!("loaded environment from .env");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub redis_url: Option<String>,
    pub jwt: JwtConfig,
    pub create_user_throttle: ThrottlePolicy,
    pub delete_strategy: DeleteStrategy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: required(lookup, "DATABASE_URL")?,
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_or(lookup, "DB_MIN_CONNECTIONS", 10)?,
            run_migrations: parse_or(lookup, "RUN_MIGRATIONS", false)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS".to_string(),
                value: database.min_connections.to_string(),
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let limit: u32 = parse_or(lookup, "CREATE_USER_RATE_LIMIT", 5)?;
        if limit == 0 {
            return Err(ConfigError::Invalid {
                key: "CREATE_USER_RATE_LIMIT".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let window_secs: u64 = parse_or(lookup, "CREATE_USER_RATE_WINDOW_SECS", 10)?;
        if window_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "CREATE_USER_RATE_WINDOW_SECS".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let delete_strategy = parse_or(lookup, "USER_DELETE_STRATEGY", DeleteStrategy::Hard)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "PORT", 8080)?,
            database,
            redis_url: lookup("REDIS_URL").filter(|url| !url.trim().is_empty()),
            jwt: JwtConfig::from_lookup(lookup)?,
            create_user_throttle: ThrottlePolicy::new(limit, Duration::from_secs(window_secs)),
            delete_strategy,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
