use async_trait::async_trait;

use super::config_provider::HashingParams;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password hashing failed")]
    HashFailed,

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(
        &self,
        password: &str,
        params: &HashingParams,
    ) -> Result<String, HashError>;
}
