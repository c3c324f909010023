//! Types for passcode lifecycle results

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A freshly issued passcode, handed to the caller for delivery
///
/// The plaintext code exists only here; the store keeps its digest.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedOtp {
    /// Plaintext six-digit code
    pub code: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Issuance number within the current session
    pub resend_count: u32,
    /// Session identifier of the stored entry
    pub session_id: Uuid,
}

impl fmt::Debug for IssuedOtp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedOtp")
            .field("code", &"******")
            .field("expires_at", &self.expires_at)
            .field("resend_count", &self.resend_count)
            .field("session_id", &self.session_id)
            .finish()
    }
}
