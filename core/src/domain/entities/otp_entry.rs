//! Pending passcode entity, one per phone key.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of failed comparisons before the entry is discarded
pub const MAX_ATTEMPTS: u32 = 3;

/// Maximum number of issuances per OTP session
pub const MAX_RESENDS: u32 = 3;

/// Length of the passcode
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for passcodes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// A pending passcode. Holds the digest only, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Diagnostic session identifier, logged alongside lifecycle events
    pub id: Uuid,

    /// Hex SHA-256 digest of the passcode
    pub code_digest: String,

    /// Failed comparisons since creation
    pub attempts: u32,

    /// Issuances in the current session (1 on issue, +1 per resend)
    pub resend_count: u32,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the entry is dead
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates a fresh entry with zero attempts
    ///
    /// # Arguments
    ///
    /// * `code_digest` - Digest of the newly generated passcode
    /// * `resend_count` - Issuance number within the current session
    /// * `now` - Creation instant
    /// * `ttl` - Lifetime of the passcode
    pub fn new(code_digest: String, resend_count: u32, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            code_digest,
            attempts: 0,
            resend_count,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Strictly after `expires_at`; the expiry instant itself is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the attempt ceiling has been reached
    pub fn attempts_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Whether another resend is allowed in this session
    pub fn can_resend(&self, max_resends: u32) -> bool {
        self.resend_count < max_resends
    }

    /// Gets the number of remaining verification attempts (0 if exceeded)
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }
}
