//! Rate limiting trait consulted on every issue and resend

use async_trait::async_trait;

use crate::domain::value_objects::PhoneKey;

/// Rolling-window admission control keyed by phone number
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Record a request and report whether it is admitted
    ///
    /// Denied requests are not recorded.
    async fn admit(&self, phone: &PhoneKey) -> bool;

    /// Requests currently counted inside the window
    async fn window_count(&self, phone: &PhoneKey) -> u32;

    /// Seconds until the next request would be admitted, `None` if it would be now
    async fn retry_after(&self, phone: &PhoneKey) -> Option<u64>;

    /// Configured window length in whole minutes
    fn window_minutes(&self) -> u64;
}
