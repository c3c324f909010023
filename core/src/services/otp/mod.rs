//! Passcode lifecycle module
//!
//! This module provides the one-time passcode workflow:
//! - Code generation from the OS CSPRNG and SHA-256 digests
//! - Time-bounded storage keyed by phone number
//! - Attempt-limited verification with a fixed check order
//! - Resend ceilings on top of the per-phone rate limiter

mod code;
mod config;
mod service;
mod store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use code::{digest_code, digests_match, generate_code};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use store::InMemoryOtpStore;
pub use traits::{OtpDeliveryTrait, OtpStoreTrait};
pub use types::IssuedOtp;
