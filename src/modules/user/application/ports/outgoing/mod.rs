pub mod config_provider;
pub mod password_hasher;
pub mod rate_limiter;
pub mod token_provider;
pub mod user_repository;

pub use config_provider::{ConfigProvider, HashingParams, UserServiceConfig};
pub use password_hasher::{HashError, PasswordHasher};
pub use rate_limiter::{RateLimitError, RateLimiter, ThrottlePolicy};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{UserRepository, UserRepositoryError};
