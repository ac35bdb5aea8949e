use argon2::Params;
use std::sync::Arc;

use crate::shared::config::{env_lookup, parse_or, ConfigError};
use crate::user::application::ports::outgoing::{
    ConfigProvider, HashingParams, UserServiceConfig,
};

type LookupFn = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the user-service settings from the environment on every call.
#[derive(Clone)]
pub struct EnvConfigProvider {
    lookup: LookupFn,
}

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self {
            lookup: Arc::new(env_lookup),
        }
    }

    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn load(&self) -> Result<UserServiceConfig, ConfigError> {
        let lookup = &*self.lookup;
        let defaults = HashingParams::default();

        let hashing = HashingParams {
            memory_kib: parse_or(lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        Params::new(
            hashing.memory_kib,
            hashing.iterations,
            hashing.parallelism,
            None,
        )
        .map_err(|e| ConfigError::Invalid {
            key: "ARGON2_MEMORY_KIB/ARGON2_ITERATIONS/ARGON2_PARALLELISM".to_string(),
            value: format!(
                "{}/{}/{}",
                hashing.memory_kib, hashing.iterations, hashing.parallelism
            ),
            reason: e.to_string(),
        })?;

        Ok(UserServiceConfig { hashing })
    }
}
