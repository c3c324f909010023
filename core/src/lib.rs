//! # Phone OTP Core
//!
//! Core business logic and domain layer for the phone OTP service.
//! This crate contains the passcode entity, the lifecycle manager with its
//! store and rate limiter, session token issuance, and error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
