//! Credential signing configuration

use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session token signing
    #[serde(default)]
    pub jwt: JwtConfig,
}

/// JWT signing configuration for the session token issued after verification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret; `None` leaves token issuance unconfigured
    #[serde(default)]
    pub secret: Option<String>,

    /// Token validity in days
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,

    /// Optional issuer claim
    #[serde(default)]
    pub issuer: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiry_days: default_expiry_days(),
            issuer: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Whether a usable signing secret is present
    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

fn default_expiry_days() -> i64 {
    7
}
