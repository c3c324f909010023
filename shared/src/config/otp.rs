//! Passcode policy and phone format configuration

use serde::{Deserialize, Serialize};

/// Lifetime and ceilings applied to every issued passcode
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    #[serde(default = "default_code_ttl_minutes")]
    pub code_ttl_minutes: i64,

    /// Failed comparisons tolerated before the entry is discarded
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Issuances allowed per OTP session (the initial send counts as one)
    #[serde(default = "default_max_resends")]
    pub max_resends: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: default_code_ttl_minutes(),
            max_attempts: default_max_attempts(),
            max_resends: default_max_resends(),
        }
    }
}

/// Accepted phone number format
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneConfig {
    /// Required international prefix, including the leading '+'
    #[serde(default = "default_country_prefix")]
    pub country_prefix: String,

    /// Total length including the prefix
    #[serde(default = "default_total_length")]
    pub total_length: usize,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_prefix: default_country_prefix(),
            total_length: default_total_length(),
        }
    }
}

fn default_code_ttl_minutes() -> i64 {
    5
}

fn default_max_attempts() -> u32 {
    3
}

fn default_max_resends() -> u32 {
    3
}

fn default_country_prefix() -> String {
    "+91".to_string()
}

fn default_total_length() -> usize {
    13
}
