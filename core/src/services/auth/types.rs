//! Types for authentication service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Outcome of a successful send or resend
#[derive(Debug, Clone)]
pub struct OtpDispatch {
    /// Delivery provider's message identifier
    pub message_id: String,
    /// When the delivered code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Issuance number within the current session
    pub resend_count: u32,
    /// Session identifier of the stored entry
    pub session_id: Uuid,
}
