use async_trait::async_trait;
use std::time::Duration;

/// At most `limit` calls per `window` for a single caller key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub limit: u32,
    pub window: Duration,
}

impl ThrottlePolicy {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded for {key}: {limit} calls per {window_secs}s")]
    Exceeded {
        key: String,
        limit: u32,
        window_secs: u64,
    },

    #[error("Rate limiter unavailable: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Records one call for `key` and fails once the policy is exceeded.
    async fn check(&self, key: &str, policy: ThrottlePolicy) -> Result<(), RateLimitError>;
}
