use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::shared::config::ConfigError;
use crate::tests::support::fixtures::sample_user;
use crate::user::application::domain::entities::{User, UserId};
use crate::user::application::ports::incoming::use_cases::{
    CallerKey, CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError,
    DeleteUserUseCase, FetchUserError, FetchUserUseCase, UpdateUserCommand, UpdateUserError,
    UpdateUserUseCase,
};
use crate::user::application::ports::outgoing::{
    ConfigProvider, HashError, HashingParams, PasswordHasher, RateLimitError, RateLimiter,
    ThrottlePolicy, UserServiceConfig,
};

// ─── Outgoing ports ──────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum LimiterMode {
    Allow,
    Deny,
    Broken,
}

/// Rate limiter with a fixed answer. Clones share the recorded keys.
#[derive(Debug, Clone)]
pub struct StubRateLimiter {
    mode: LimiterMode,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubRateLimiter {
    fn with_mode(mode: LimiterMode) -> Self {
        Self {
            mode,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn allow() -> Self {
        Self::with_mode(LimiterMode::Allow)
    }

    pub fn deny() -> Self {
        Self::with_mode(LimiterMode::Deny)
    }

    pub fn broken() -> Self {
        Self::with_mode(LimiterMode::Broken)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateLimiter for StubRateLimiter {
    async fn check(&self, key: &str, policy: ThrottlePolicy) -> Result<(), RateLimitError> {
        self.calls.lock().unwrap().push(key.to_string());

        match self.mode {
            LimiterMode::Allow => Ok(()),
            LimiterMode::Deny => Err(RateLimitError::Exceeded {
                key: key.to_string(),
                limit: policy.limit,
                window_secs: policy.window.as_secs(),
            }),
            LimiterMode::Broken => Err(RateLimitError::Backend("connection refused".to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StubConfigProvider {
    result: Result<UserServiceConfig, ConfigError>,
}

impl StubConfigProvider {
    pub fn ok() -> Self {
        Self {
            result: Ok(UserServiceConfig::default()),
        }
    }

    pub fn with_hashing(hashing: HashingParams) -> Self {
        Self {
            result: Ok(UserServiceConfig { hashing }),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ConfigError::Missing("ARGON2_MEMORY_KIB".to_string())),
        }
    }
}

impl ConfigProvider for StubConfigProvider {
    fn load(&self) -> Result<UserServiceConfig, ConfigError> {
        self.result.clone()
    }
}

/// Deterministic "hash" that encodes the params it was called with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPasswordHasher;

impl StubPasswordHasher {
    pub fn expected_hash(password: &str, params: &HashingParams) -> String {
        format!(
            "stub$m={},t={},p={}${}",
            params.memory_kib, params.iterations, params.parallelism, password
        )
    }
}

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(
        &self,
        password: &str,
        params: &HashingParams,
    ) -> Result<String, HashError> {
        Ok(Self::expected_hash(password, params))
    }
}

// ─── Use cases ───────────────────────────────────────────

/// Records the caller key and echoes a user built from the command.
#[derive(Debug, Clone, Default)]
pub struct StubCreateUserUseCase {
    callers: Arc<Mutex<Vec<String>>>,
}

impl StubCreateUserUseCase {
    pub fn callers(&self) -> Vec<String> {
        self.callers.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(
        &self,
        caller: &CallerKey,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError> {
        self.callers.lock().unwrap().push(caller.to_string());

        let mut user = sample_user(1);
        user.first_name = Some(command.first_name().to_string());
        user.username = Some(command.username().to_string());
        Ok(user)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserId, DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

/// Returns the sample user for whatever id is asked for.
#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError> {
        Ok(sample_user(user_id.value()))
    }
}
