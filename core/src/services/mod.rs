//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod otp;
pub mod rate_limit;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, OtpDispatch};
pub use clock::{Clock, ManualClock, SystemClock};
pub use otp::{
    IssuedOtp, InMemoryOtpStore, OtpDeliveryTrait, OtpService, OtpServiceConfig, OtpStoreTrait,
};
pub use rate_limit::{InMemoryRateLimiter, RateLimiterTrait};
pub use token::{SessionClaims, TokenService, TokenServiceConfig};
