//! Shared error response structures

use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message, surfaced to the client verbatim
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Client-facing messages for request-level failures
pub mod error_messages {
    pub const INVALID_PHONE_FORMAT: &str = "Invalid phone number format";
    pub const PHONE_REQUIRED: &str = "Phone number is required";
    pub const PHONE_AND_OTP_REQUIRED: &str = "Phone and OTP are required";
    pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
    pub const SEND_FAILED: &str = "Failed to send OTP";
    pub const RESEND_FAILED: &str = "Failed to resend OTP";
    pub const VERIFY_FAILED: &str = "Failed to verify OTP";
    pub const NOT_FOUND: &str = "The requested resource was not found";
}
