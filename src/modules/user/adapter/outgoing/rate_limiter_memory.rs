use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::user::application::ports::outgoing::{RateLimitError, RateLimiter, ThrottlePolicy};

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window limiter kept in process memory. Used when no Redis is
/// configured; counts are not shared between instances.
#[derive(Debug, Default)]
pub struct InMemoryRateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: &str, policy: ThrottlePolicy) -> Result<(), RateLimitError> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        // drop windows that have run out so idle callers do not accumulate
        windows.retain(|_, w| now.duration_since(w.started_at) < policy.window);

        let window = windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if window.count >= policy.limit {
            debug!(key, count = window.count, "rate limit exceeded");
            return Err(RateLimitError::Exceeded {
                key: key.to_string(),
                limit: policy.limit,
                window_secs: policy.window.as_secs(),
            });
        }

        window.count += 1;
        Ok(())
    }
}
