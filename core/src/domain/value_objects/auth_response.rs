//! Authentication response value object returned after a successful verification.

use serde::{Deserialize, Serialize};

/// Session token issued once a passcode has been verified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a new authentication response
    ///
    /// # Arguments
    ///
    /// * `token` - Signed session token
    /// * `expires_in` - Token lifetime in seconds
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}
