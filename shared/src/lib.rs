//! Shared utilities and common types for the phone OTP server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (phone validation, masking)
//! - Response envelopes

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DeliveryConfig, Environment, JwtConfig,
    LoggingConfig, OtpConfig, PhoneConfig, RateLimitConfig, ServerConfig,
};
pub use errors::{error_messages, ErrorResponse};
pub use types::{HealthResponse, SuccessResponse};
pub use utils::phone;
