//! Unit tests for the passcode lifecycle manager

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use otp_shared::{PhoneConfig, RateLimitConfig};

use crate::domain::value_objects::PhoneKey;
use crate::errors::{DomainError, OtpError};
use crate::services::clock::{Clock, ManualClock};
use crate::services::otp::{
    digest_code, InMemoryOtpStore, OtpService, OtpServiceConfig, OtpStoreTrait,
};
use crate::services::rate_limit::{InMemoryRateLimiter, RateLimiterTrait};

use super::mocks::CountingRateLimiter;

const PHONE: &str = "+911234567890";

struct Harness {
    clock: Arc<ManualClock>,
    store: Arc<InMemoryOtpStore>,
    service: OtpService,
}

fn phone(raw: &str) -> PhoneKey {
    PhoneKey::parse(raw, &PhoneConfig::default()).unwrap()
}

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
    ))
}

fn harness() -> Harness {
    let clock = clock();
    let limiter = Arc::new(InMemoryRateLimiter::new(RateLimitConfig::default(), clock.clone()));
    harness_with_limiter(clock, limiter)
}

fn harness_with_limiter(clock: Arc<ManualClock>, limiter: Arc<dyn RateLimiterTrait>) -> Harness {
    let store = Arc::new(InMemoryOtpStore::new());
    let service = OtpService::new(
        store.clone(),
        limiter,
        clock.clone(),
        OtpServiceConfig::default(),
    );
    Harness { clock, store, service }
}

fn wrong_code(code: &str) -> String {
    if code == "999999" { "100000".to_string() } else { "999999".to_string() }
}

fn otp_error(result: Result<impl std::fmt::Debug, DomainError>) -> OtpError {
    match result {
        Err(DomainError::Otp(error)) => error,
        other => panic!("Expected passcode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_issue_stores_digest_only() {
    let h = harness();
    let key = phone(PHONE);

    let issued = h.service.issue(&key).await.unwrap();
    let entry = h.store.get(&key).await.unwrap();

    assert_eq!(issued.code.len(), 6);
    assert_eq!(entry.code_digest, digest_code(&issued.code));
    assert_ne!(entry.code_digest, issued.code);
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.resend_count, 1);
    assert_eq!(entry.expires_at, h.clock.now() + Duration::minutes(5));
    assert_eq!(issued.session_id, entry.id);
}

#[tokio::test]
async fn test_issued_otp_debug_redacts_code() {
    let h = harness();
    let issued = h.service.issue(&phone(PHONE)).await.unwrap();

    let rendered = format!("{:?}", issued);
    assert!(!rendered.contains(&issued.code));
}

#[tokio::test]
async fn test_verify_success_removes_entry() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();

    h.service.verify(&key, &issued.code).await.unwrap();

    assert!(h.store.get(&key).await.is_none());
    // One-time use
    assert_eq!(otp_error(h.service.verify(&key, &issued.code).await), OtpError::NotFoundOrExpired);
}

#[tokio::test]
async fn test_verify_without_entry() {
    let h = harness();
    assert_eq!(
        otp_error(h.service.verify(&phone(PHONE), "123456").await),
        OtpError::NotFoundOrExpired
    );
}

#[tokio::test]
async fn test_wrong_code_increments_attempts_and_keeps_entry() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();

    let result = h.service.verify(&key, &wrong_code(&issued.code)).await;

    assert_eq!(otp_error(result), OtpError::InvalidCode);
    let entry = h.store.get(&key).await.unwrap();
    assert_eq!(entry.attempts, 1);
    assert_eq!(entry.code_digest, digest_code(&issued.code));
}

#[tokio::test]
async fn test_attempt_ceiling_enforced_on_next_call() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();
    let wrong = wrong_code(&issued.code);

    for expected_attempts in 1..=3 {
        assert_eq!(otp_error(h.service.verify(&key, &wrong).await), OtpError::InvalidCode);
        assert_eq!(h.store.get(&key).await.unwrap().attempts, expected_attempts);
    }

    // Even the correct code is refused once the ceiling is reached
    assert_eq!(
        otp_error(h.service.verify(&key, &issued.code).await),
        OtpError::TooManyAttempts
    );
    assert!(h.store.get(&key).await.is_none());
    assert_eq!(
        otp_error(h.service.verify(&key, &issued.code).await),
        OtpError::NotFoundOrExpired
    );
}

#[tokio::test]
async fn test_correct_code_after_two_failures_succeeds() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();
    let wrong = wrong_code(&issued.code);

    h.service.verify(&key, &wrong).await.unwrap_err();
    h.service.verify(&key, &wrong).await.unwrap_err();

    assert!(h.service.verify(&key, &issued.code).await.is_ok());
}

#[tokio::test]
async fn test_correct_code_after_expiry_is_expired() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();

    h.clock.advance(Duration::minutes(5) + Duration::seconds(1));

    assert_eq!(otp_error(h.service.verify(&key, &issued.code).await), OtpError::Expired);
    assert!(h.store.get(&key).await.is_none());
}

#[tokio::test]
async fn test_code_valid_at_exact_expiry_instant() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();

    h.clock.advance(Duration::minutes(5));

    assert!(h.service.verify(&key, &issued.code).await.is_ok());
}

#[tokio::test]
async fn test_expiry_checked_before_attempt_ceiling() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();
    let wrong = wrong_code(&issued.code);
    for _ in 0..3 {
        h.service.verify(&key, &wrong).await.unwrap_err();
    }

    h.clock.advance(Duration::minutes(6));

    assert_eq!(otp_error(h.service.verify(&key, &issued.code).await), OtpError::Expired);
}

#[tokio::test]
async fn test_expired_entries_linger_until_touched() {
    let h = harness();
    let key = phone(PHONE);
    h.service.issue(&key).await.unwrap();

    h.clock.advance(Duration::hours(1));
    assert_eq!(h.store.len().await, 1);

    h.service.verify(&key, "123456").await.unwrap_err();
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn test_latest_issue_wins() {
    let h = harness();
    let key = phone(PHONE);
    let first = h.service.issue(&key).await.unwrap();
    let second = h.service.issue(&key).await.unwrap();

    assert_eq!(h.store.len().await, 1);
    if first.code != second.code {
        assert_eq!(otp_error(h.service.verify(&key, &first.code).await), OtpError::InvalidCode);
    }
    assert!(h.service.verify(&key, &second.code).await.is_ok());
}

#[tokio::test]
async fn test_issue_resets_attempts_and_resend_count() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter);
    let key = phone(PHONE);

    let issued = h.service.issue(&key).await.unwrap();
    h.service.verify(&key, &wrong_code(&issued.code)).await.unwrap_err();
    h.service.resend(&key).await.unwrap();

    h.service.issue(&key).await.unwrap();
    let entry = h.store.get(&key).await.unwrap();
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.resend_count, 1);
}

#[tokio::test]
async fn test_rate_limit_applies_across_issue_and_resend() {
    let h = harness();
    let key = phone(PHONE);

    h.service.issue(&key).await.unwrap();
    h.service.resend(&key).await.unwrap();
    h.service.issue(&key).await.unwrap();

    match otp_error(h.service.resend(&key).await) {
        OtpError::RateLimited { window_minutes, retry_after_seconds } => {
            assert_eq!(window_minutes, 10);
            assert_eq!(retry_after_seconds, 600);
        }
        other => panic!("Expected rate limit, got {:?}", other),
    }
    assert!(matches!(
        otp_error(h.service.issue(&key).await),
        OtpError::RateLimited { .. }
    ));

    h.clock.advance(Duration::minutes(10));
    assert!(h.service.issue(&key).await.is_ok());
}

#[tokio::test]
async fn test_rate_limited_issue_keeps_existing_entry() {
    let h = harness();
    let key = phone(PHONE);
    for _ in 0..2 {
        h.service.issue(&key).await.unwrap();
    }
    let live = h.service.issue(&key).await.unwrap();

    h.service.issue(&key).await.unwrap_err();

    assert!(h.service.verify(&key, &live.code).await.is_ok());
}

#[tokio::test]
async fn test_resend_increments_count_and_replaces_code() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter);
    let key = phone(PHONE);

    let first = h.service.issue(&key).await.unwrap();
    h.service.verify(&key, &wrong_code(&first.code)).await.unwrap_err();
    let resent = h.service.resend(&key).await.unwrap();

    let entry = h.store.get(&key).await.unwrap();
    assert_eq!(resent.resend_count, 2);
    assert_eq!(entry.resend_count, 2);
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.code_digest, digest_code(&resent.code));
}

#[tokio::test]
async fn test_resend_without_entry_starts_at_one() {
    let h = harness();
    let key = phone(PHONE);

    let resent = h.service.resend(&key).await.unwrap();

    assert_eq!(resent.resend_count, 1);
    assert_eq!(h.store.get(&key).await.unwrap().resend_count, 1);
}

#[tokio::test]
async fn test_resend_ceiling_skips_rate_limiter() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter.clone());
    let key = phone(PHONE);

    h.service.issue(&key).await.unwrap();
    h.service.resend(&key).await.unwrap();
    h.service.resend(&key).await.unwrap();
    assert_eq!(limiter.calls(), 3);

    assert_eq!(otp_error(h.service.resend(&key).await), OtpError::ResendLimitExceeded);
    assert_eq!(limiter.calls(), 3);
}

#[tokio::test]
async fn test_resend_ceiling_counts_expired_session() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter);
    let key = phone(PHONE);

    h.service.issue(&key).await.unwrap();
    h.service.resend(&key).await.unwrap();
    h.service.resend(&key).await.unwrap();
    h.clock.advance(Duration::hours(1));

    assert_eq!(otp_error(h.service.resend(&key).await), OtpError::ResendLimitExceeded);
}

#[tokio::test]
async fn test_rate_limited_error_carries_retry_after() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    limiter.set_deny(true);
    let h = harness_with_limiter(clock, limiter);

    assert_eq!(
        otp_error(h.service.issue(&phone(PHONE)).await),
        OtpError::RateLimited { window_minutes: 10, retry_after_seconds: 42 }
    );
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn test_invalidate() {
    let h = harness();
    let key = phone(PHONE);
    let issued = h.service.issue(&key).await.unwrap();

    assert!(h.service.invalidate(&key).await);
    assert!(!h.service.invalidate(&key).await);
    assert_eq!(
        otp_error(h.service.verify(&key, &issued.code).await),
        OtpError::NotFoundOrExpired
    );
}

#[tokio::test]
async fn test_phones_do_not_share_state() {
    let h = harness();
    let first = phone(PHONE);
    let second = phone("+919876543210");

    let issued = h.service.issue(&first).await.unwrap();
    h.service.issue(&second).await.unwrap();

    assert!(h.service.verify(&first, &issued.code).await.is_ok());
    assert!(h.service.entry(&second).await.is_some());
}

#[tokio::test]
async fn test_reissue_after_exhaustion_starts_new_cycle() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter);
    let key = phone(PHONE);

    let issued = h.service.issue(&key).await.unwrap();
    let wrong = wrong_code(&issued.code);
    for _ in 0..3 {
        h.service.verify(&key, &wrong).await.unwrap_err();
    }
    assert_eq!(otp_error(h.service.verify(&key, &wrong).await), OtpError::TooManyAttempts);

    let fresh = h.service.issue(&key).await.unwrap();
    let entry = h.store.get(&key).await.unwrap();
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.resend_count, 1);
    assert!(h.service.verify(&key, &fresh.code).await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issues_respect_window() {
    let h = harness();
    let service = Arc::new(h.service);
    let key = phone(PHONE);

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let service = service.clone();
            let key = key.clone();
            tokio::spawn(async move { service.issue(&key).await.is_ok() })
        })
        .collect();

    let mut admitted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, 3);
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_wrong_guesses_never_exceed_ceiling() {
    let clock = clock();
    let limiter = Arc::new(CountingRateLimiter::new());
    let h = harness_with_limiter(clock, limiter);
    let service = Arc::new(h.service);
    let key = phone(PHONE);
    let issued = service.issue(&key).await.unwrap();
    let wrong = wrong_code(&issued.code);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let key = key.clone();
            let wrong = wrong.clone();
            tokio::spawn(async move { service.verify(&key, &wrong).await })
        })
        .collect();

    let mut invalid = 0;
    for handle in handles {
        if let Err(DomainError::Otp(OtpError::InvalidCode)) = handle.await.unwrap() {
            invalid += 1;
        }
    }

    assert_eq!(invalid, 3);
    assert!(h.store.get(&key).await.is_none());
}
