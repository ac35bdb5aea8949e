use async_trait::async_trait;
use deadpool_redis::{redis, Pool};
use std::sync::Arc;
use tracing::{debug, error};

use crate::user::application::ports::outgoing::{RateLimitError, RateLimiter, ThrottlePolicy};

/// Fixed-window limiter shared across instances through Redis.
///
/// ```text
/// throttle:{caller_key} -> call count, TTL = window
/// ```
///
/// `INCR` and `EXPIRE NX` run in one `MULTI`/`EXEC` block, so every counter
/// carries a TTL and only the first call of a window sets it. The key
/// vanishing opens the next window. Requires Redis 7 or later.
#[derive(Clone)]
pub struct RedisRateLimiter {
    pool: Arc<Pool>,
}

impl RedisRateLimiter {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn throttle_key(key: &str) -> String {
        format!("throttle:{key}")
    }

    fn window_pipeline(redis_key: &str, window_secs: u64) -> redis::Pipeline {
        let mut pipe = redis::pipe();
        pipe.atomic()
            .cmd("INCR")
            .arg(redis_key)
            .cmd("EXPIRE")
            .arg(redis_key)
            .arg(window_secs)
            .arg("NX")
            .ignore();
        pipe
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, RateLimitError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            RateLimitError::Backend(format!("Pool error: {}", e))
        })
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn check(&self, key: &str, policy: ThrottlePolicy) -> Result<(), RateLimitError> {
        let redis_key = Self::throttle_key(key);
        let mut conn = self.get_conn().await?;

        let (count,): (u64,) = Self::window_pipeline(&redis_key, policy.window.as_secs().max(1))
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Throttle pipeline failed for {redis_key}: {e}");
                RateLimitError::Backend(e.to_string())
            })?;

        if count > u64::from(policy.limit) {
            debug!("Rate limit exceeded for key: {key}");
            return Err(RateLimitError::Exceeded {
                key: key.to_string(),
                limit: policy.limit,
                window_secs: policy.window.as_secs(),
            });
        }

        Ok(())
    }
}
