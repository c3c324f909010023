//! API response envelopes

use serde::{Deserialize, Serialize};

/// Success body: `{ "success": true, "message": "...", "token"?: "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true` for this envelope
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Session token, present only after a successful verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SuccessResponse {
    /// Create a success response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
        }
    }

    /// Create a success response carrying a session token
    pub fn with_token(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: Some(token.into()),
        }
    }
}

/// Liveness probe body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}
