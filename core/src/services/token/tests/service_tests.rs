//! Unit tests for the session token service

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use otp_shared::{JwtConfig, PhoneConfig};

use crate::domain::value_objects::PhoneKey;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{SessionClaims, TokenService, TokenServiceConfig};

const SECRET: &str = "test-secret-key-for-session-tokens";

fn phone() -> PhoneKey {
    PhoneKey::parse("+911234567890", &PhoneConfig::default()).unwrap()
}

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: Some(SECRET.to_string()),
        ..Default::default()
    })
}

#[test]
fn test_issue_token_carries_phone_and_seven_day_expiry() {
    let service = service();
    let before = Utc::now().timestamp();

    let response = service.issue_token(&phone()).unwrap();
    let claims = service.decode_token(&response.token).unwrap();

    assert_eq!(response.expires_in, 7 * 24 * 60 * 60);
    assert_eq!(claims.phone, "+911234567890");
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    assert!(claims.iat >= before);
    assert!(claims.timestamp / 1000 >= before);
    assert!(claims.iss.is_none());
}

#[test]
fn test_missing_secret_fails_issuance() {
    let service = TokenService::new(TokenServiceConfig::default());

    assert!(!service.has_signing_key());
    assert!(matches!(
        service.issue_token(&phone()),
        Err(DomainError::Token(TokenError::SigningKeyMissing))
    ));
}

#[test]
fn test_empty_configured_secret_counts_as_missing() {
    let config = JwtConfig {
        secret: Some(String::new()),
        ..Default::default()
    };
    let service = TokenService::new(TokenServiceConfig::from(&config));

    assert!(!service.has_signing_key());
    assert!(!TokenService::new(TokenServiceConfig::from(&JwtConfig::new("  "))).has_signing_key());
    assert!(TokenService::new(TokenServiceConfig::from(&JwtConfig::new("s3cret"))).has_signing_key());
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: Some("a-different-secret".to_string()),
        ..Default::default()
    });
    let token = other.issue_token(&phone()).unwrap().token;

    assert!(matches!(
        service().decode_token(&token),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        phone: "+911234567890".to_string(),
        timestamp: (now - 3600) * 1000,
        iat: now - 3600,
        exp: now - 1800,
        iss: None,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        service().decode_token(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(matches!(
        service().decode_token("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_issuer_is_set_and_validated() {
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: Some(SECRET.to_string()),
        issuer: Some("phone-otp".to_string()),
        ..Default::default()
    });

    let token = service.issue_token(&phone()).unwrap().token;
    assert_eq!(service.decode_token(&token).unwrap().iss.as_deref(), Some("phone-otp"));

    // Tokens without the issuer claim fail validation
    let plain = self::service().issue_token(&phone()).unwrap().token;
    assert!(matches!(
        service.decode_token(&plain),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_foreign_issuer_is_rejected() {
    let issuer = |name: &str| {
        TokenService::new(TokenServiceConfig {
            jwt_secret: Some(SECRET.to_string()),
            issuer: Some(name.to_string()),
            ..Default::default()
        })
    };

    let token = issuer("other-service").issue_token(&phone()).unwrap().token;

    assert!(issuer("phone-otp").decode_token(&token).is_err());
}
