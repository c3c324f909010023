//! In-memory sliding-window rate limiter

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use otp_shared::RateLimitConfig;
use tokio::sync::Mutex;

use crate::domain::value_objects::PhoneKey;
use crate::services::clock::Clock;

use super::traits::RateLimiterTrait;

/// Keeps the admitted request timestamps of each phone, oldest first
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    clock: Arc<dyn Clock>,
    records: Mutex<HashMap<PhoneKey, VecDeque<DateTime<Utc>>>>,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            records: Mutex::new(HashMap::new()),
        }
    }

    fn window(&self) -> Duration {
        i64::try_from(self.config.window_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }

    /// Drop timestamps that are a full window old or older
    fn prune(record: &mut VecDeque<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) {
        while record.front().is_some_and(|oldest| now - *oldest >= window) {
            record.pop_front();
        }
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn admit(&self, phone: &PhoneKey) -> bool {
        let now = self.clock.now();
        let window = self.window();
        let mut records = self.records.lock().await;

        let record = records.entry(phone.clone()).or_default();
        Self::prune(record, now, window);

        if record.len() >= self.config.max_per_window as usize {
            tracing::warn!(
                phone = %phone.masked(),
                window_count = record.len(),
                event = "rate_limit_exceeded",
                "Passcode request rate limit exceeded"
            );
            return false;
        }

        record.push_back(now);
        true
    }

    async fn window_count(&self, phone: &PhoneKey) -> u32 {
        let now = self.clock.now();
        let window = self.window();
        let mut records = self.records.lock().await;

        let Some(record) = records.get_mut(phone) else {
            return 0;
        };
        Self::prune(record, now, window);
        let count = record.len() as u32;
        if record.is_empty() {
            records.remove(phone);
        }
        count
    }

    async fn retry_after(&self, phone: &PhoneKey) -> Option<u64> {
        let now = self.clock.now();
        let window = self.window();
        let mut records = self.records.lock().await;

        let record = records.get_mut(phone)?;
        Self::prune(record, now, window);
        if record.len() < self.config.max_per_window as usize {
            return None;
        }

        // Admission reopens once the oldest counted request leaves the window
        let oldest = *record.front()?;
        let wait = (window - (now - oldest)).num_milliseconds().max(0) as u64;
        Some(wait.div_ceil(1000).max(1))
    }

    fn window_minutes(&self) -> u64 {
        self.config.window_minutes()
    }
}
