use crate::shared::config::ConfigError;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

/// Settings the user mutations read at request time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserServiceConfig {
    pub hashing: HashingParams,
}

pub trait ConfigProvider: Send + Sync {
    fn load(&self) -> Result<UserServiceConfig, ConfigError>;
}
