//! Configuration for the passcode lifecycle manager

use chrono::Duration;
use otp_shared::OtpConfig;

use crate::domain::entities::otp_entry::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS, MAX_RESENDS};

/// Configuration for the passcode lifecycle manager
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before a passcode expires
    pub code_ttl_minutes: i64,
    /// Failed comparisons tolerated before the entry is discarded
    pub max_attempts: u32,
    /// Issuances allowed per session
    pub max_resends: u32,
}

impl OtpServiceConfig {
    pub fn code_ttl(&self) -> Duration {
        Duration::minutes(self.code_ttl_minutes)
    }
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            max_resends: MAX_RESENDS,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_ttl_minutes: config.code_ttl_minutes,
            max_attempts: config.max_attempts,
            max_resends: config.max_resends,
        }
    }
}
