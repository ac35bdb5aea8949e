use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::user::application::domain::entities::{NewUser, User};
use crate::user::application::ports::incoming::use_cases::{
    CallerKey, CreateUserCommand, CreateUserError, CreateUserUseCase,
};
use crate::user::application::ports::outgoing::{
    ConfigProvider, PasswordHasher, RateLimiter, ThrottlePolicy, UserRepository,
    UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateUserService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    rate_limiter: Arc<dyn RateLimiter + Send + Sync>,
    config_provider: Arc<dyn ConfigProvider + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    throttle: ThrottlePolicy,
}

impl CreateUserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        rate_limiter: Arc<dyn RateLimiter + Send + Sync>,
        config_provider: Arc<dyn ConfigProvider + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        throttle: ThrottlePolicy,
    ) -> Self {
        Self {
            user_repository,
            rate_limiter,
            config_provider,
            password_hasher,
            throttle,
        }
    }
}

#[async_trait]
impl CreateUserUseCase for CreateUserService {
    async fn execute(
        &self,
        caller: &CallerKey,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError> {
        // 1️⃣ Throttle per caller
        self.rate_limiter
            .check(caller.as_str(), self.throttle)
            .await
            .map_err(|e| {
                warn!(caller = %caller, "create user throttled: {}", e);
                CreateUserError::Throttled(e.to_string())
            })?;

        // 2️⃣ Request-time configuration
        let config = self.config_provider.load().map_err(|e| {
            error!("failed to load user service config: {}", e);
            CreateUserError::Config(e.to_string())
        })?;

        // 3️⃣ Optional password
        let password_hash = match command.password() {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(password, &config.hashing)
                    .await
                    .map_err(|e| CreateUserError::Hashing(e.to_string()))?,
            ),
            None => None,
        };

        // 4️⃣ Persist
        let new_user = NewUser {
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            username: command.username().to_string(),
            email: command.email().to_string(),
            role_id: command.role_id(),
            password_hash,
        };

        let user = self
            .user_repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
                UserRepositoryError::UserNotFound => CreateUserError::RepositoryError(
                    "unexpected missing row after insert".to_string(),
                ),
            })?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }
}
