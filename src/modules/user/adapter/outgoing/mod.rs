pub mod argon2_hasher;
pub mod env_config_provider;
pub mod jwt;
pub mod rate_limiter_memory;
pub mod rate_limiter_redis;
pub mod sea_orm_entity;
pub mod user_repository_postgres;

pub use argon2_hasher::Argon2Hasher;
pub use env_config_provider::EnvConfigProvider;
pub use rate_limiter_memory::InMemoryRateLimiter;
pub use rate_limiter_redis::RedisRateLimiter;
pub use user_repository_postgres::UserRepositoryPostgres;
