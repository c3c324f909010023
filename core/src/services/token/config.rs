//! Configuration for the token service

use otp_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret; issuance fails while unset
    pub jwt_secret: Option<String>,
    /// Token expiry in days
    pub expiry_days: i64,
    /// Optional `iss` claim
    pub issuer: Option<String>,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            expiry_days: 7,
            issuer: None,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone().filter(|_| config.has_secret()),
            expiry_days: config.expiry_days,
            issuer: config.issuer.clone(),
        }
    }
}
