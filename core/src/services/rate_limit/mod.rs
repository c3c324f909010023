//! Per-phone sliding-window rate limiting for passcode issuance

mod limiter;
mod traits;


pub use limiter::InMemoryRateLimiter;
pub use traits::RateLimiterTrait;
