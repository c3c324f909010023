//! Session token issuance and decoding

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AuthResponse, PhoneKey};
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Verified phone number
    pub phone: String,
    /// Issuance time in milliseconds since the Unix epoch
    pub timestamp: i64,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// HS256 signer for session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    keys: Option<(EncodingKey, DecodingKey)>,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// A missing secret is not an error here; it surfaces as
    /// [`TokenError::SigningKeyMissing`] on first use.
    pub fn new(config: TokenServiceConfig) -> Self {
        let keys = config.jwt_secret.as_deref().map(|secret| {
            (
                EncodingKey::from_secret(secret.as_bytes()),
                DecodingKey::from_secret(secret.as_bytes()),
            )
        });

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
            // set_issuer only checks `iss` when present
            validation.set_required_spec_claims(&["exp", "iss"]);
        }

        Self {
            config,
            keys,
            validation,
        }
    }

    pub fn has_signing_key(&self) -> bool {
        self.keys.is_some()
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        Duration::days(self.config.expiry_days).num_seconds()
    }

    /// Sign a session token for a verified phone
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The signed token and its lifetime
    /// * `Err(TokenError::SigningKeyMissing)` - No secret is configured
    pub fn issue_token(&self, phone: &PhoneKey) -> DomainResult<AuthResponse> {
        let (encoding_key, _) = self.keys.as_ref().ok_or_else(|| {
            tracing::error!(event = "jwt_secret_missing", "Cannot sign session token without a secret");
            TokenError::SigningKeyMissing
        })?;

        let now = Utc::now();
        let claims = SessionClaims {
            phone: phone.as_str().to_string(),
            timestamp: now.timestamp_millis(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.config.expiry_days)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign session token");
            TokenError::TokenGenerationFailed
        })?;

        Ok(AuthResponse::new(token, self.expires_in()))
    }

    /// Verify a session token's signature and expiry and return its claims
    pub fn decode_token(&self, token: &str) -> DomainResult<SessionClaims> {
        let (_, decoding_key) = self.keys.as_ref().ok_or(TokenError::SigningKeyMissing)?;

        let data = decode::<SessionClaims>(token, decoding_key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                TokenError::TokenExpired
            } else {
                TokenError::InvalidToken
            }
        })?;

        Ok(data.claims)
    }
}
