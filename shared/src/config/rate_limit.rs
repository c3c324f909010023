//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Per-phone sliding window applied to every issue and resend request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Max admitted issuance requests per phone inside the window
    #[serde(default = "default_max_per_window")]
    pub max_per_window: u32,

    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_per_window: default_max_per_window(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl RateLimitConfig {
    /// Window length rounded up to whole minutes, for user-facing messages
    pub fn window_minutes(&self) -> u64 {
        self.window_seconds.div_ceil(60)
    }
}

fn default_max_per_window() -> u32 {
    3
}

fn default_window_seconds() -> u64 {
    600 // 10 minutes
}
