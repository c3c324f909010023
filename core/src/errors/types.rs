//! Domain-specific error types for the passcode lifecycle and token issuance
//!
//! Display strings of [`OtpError`] are part of the HTTP contract: they are
//! returned to the client verbatim.

use thiserror::Error;

/// Expected outcomes of issuance and verification that the client must see
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid phone number format")]
    InvalidPhoneFormat,

    #[error("Too many OTP requests. Please try after {window_minutes} minutes")]
    RateLimited {
        /// Configured window, for the message
        window_minutes: u64,
        /// Seconds until the oldest counted request leaves the window
        retry_after_seconds: u64,
    },

    #[error("Maximum resend limit reached")]
    ResendLimitExceeded,

    #[error("OTP not found or expired")]
    NotFoundOrExpired,

    #[error("OTP expired")]
    Expired,

    #[error("Too many invalid attempts")]
    TooManyAttempts,

    #[error("Invalid OTP")]
    InvalidCode,

    #[error("Failed to deliver OTP: {reason}")]
    DeliveryFailure { reason: String },
}

impl OtpError {
    /// Stable machine-readable identifier, logged as `error_code` on rejection
    pub fn code(&self) -> &'static str {
        match self {
            OtpError::InvalidPhoneFormat => "invalid_phone_format",
            OtpError::RateLimited { .. } => "rate_limited",
            OtpError::ResendLimitExceeded => "resend_limit_exceeded",
            OtpError::NotFoundOrExpired => "otp_not_found",
            OtpError::Expired => "otp_expired",
            OtpError::TooManyAttempts => "too_many_attempts",
            OtpError::InvalidCode => "invalid_otp",
            OtpError::DeliveryFailure { .. } => "delivery_failure",
        }
    }
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing secret is not configured")]
    SigningKeyMissing,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}
