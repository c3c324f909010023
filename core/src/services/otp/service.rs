//! Passcode lifecycle manager

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::domain::value_objects::PhoneKey;
use crate::errors::{DomainResult, OtpError};
use crate::services::clock::Clock;
use crate::services::rate_limit::RateLimiterTrait;

use super::code::{digest_code, digests_match, generate_code};
use super::config::OtpServiceConfig;
use super::traits::OtpStoreTrait;
use super::types::IssuedOtp;

/// Issues, resends, verifies and invalidates passcodes
///
/// Every operation runs its read-modify-write sequence under one lock, so at
/// most one entry per phone is live and the rolling window count stays exact
/// when requests run in parallel. Delivery happens outside, after the lock
/// is released.
pub struct OtpService {
    store: Arc<dyn OtpStoreTrait>,
    rate_limiter: Arc<dyn RateLimiterTrait>,
    clock: Arc<dyn Clock>,
    config: OtpServiceConfig,
    sequence: Mutex<()>,
}

impl OtpService {
    /// Create a new lifecycle manager
    ///
    /// # Arguments
    ///
    /// * `store` - Owner of the pending entries
    /// * `rate_limiter` - Per-phone admission control for issue and resend
    /// * `clock` - Time source for expiry arithmetic
    /// * `config` - Lifetime and ceilings
    pub fn new(
        store: Arc<dyn OtpStoreTrait>,
        rate_limiter: Arc<dyn RateLimiterTrait>,
        clock: Arc<dyn Clock>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            rate_limiter,
            clock,
            config,
            sequence: Mutex::new(()),
        }
    }

    /// Start a new passcode session for `phone`
    ///
    /// Any prior entry is replaced, live or not, and the session's issuance
    /// count restarts at 1.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - The plaintext code to deliver
    /// * `Err(OtpError::RateLimited)` - The rolling window is full
    pub async fn issue(&self, phone: &PhoneKey) -> DomainResult<IssuedOtp> {
        let _guard = self.sequence.lock().await;

        self.admit(phone).await?;
        let issued = self.store_fresh_code(phone, 1).await?;

        tracing::info!(
            phone = %phone.masked(),
            session_id = %issued.session_id,
            event = "otp_issued",
            "Issued new passcode"
        );
        Ok(issued)
    }

    /// Replace the pending code with a fresh one in the same session
    ///
    /// The resend ceiling is checked before the rate limiter, so a request
    /// refused for the ceiling does not use up a window slot.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - The plaintext code to deliver
    /// * `Err(OtpError::ResendLimitExceeded)` - The session has used all its issuances
    /// * `Err(OtpError::RateLimited)` - The rolling window is full
    pub async fn resend(&self, phone: &PhoneKey) -> DomainResult<IssuedOtp> {
        let _guard = self.sequence.lock().await;

        let prior = self.store.get(phone).await;
        if let Some(entry) = &prior {
            if !entry.can_resend(self.config.max_resends) {
                tracing::warn!(
                    phone = %phone.masked(),
                    session_id = %entry.id,
                    resend_count = entry.resend_count,
                    event = "resend_limit_exceeded",
                    "Passcode resend limit reached"
                );
                return Err(OtpError::ResendLimitExceeded.into());
            }
        }

        self.admit(phone).await?;
        let resend_count = prior.map_or(1, |entry| entry.resend_count + 1);
        let issued = self.store_fresh_code(phone, resend_count).await?;

        tracing::info!(
            phone = %phone.masked(),
            session_id = %issued.session_id,
            resend_count = resend_count,
            event = "otp_resent",
            "Resent passcode"
        );
        Ok(issued)
    }

    /// Check a submitted code
    ///
    /// Checks run in a fixed order: presence, expiry, attempt ceiling, then
    /// digest comparison. The first failing check decides the error. The
    /// entry is removed on success, on expiry and at the attempt ceiling; a
    /// mismatch only bumps the attempt count.
    pub async fn verify(&self, phone: &PhoneKey, code: &str) -> DomainResult<()> {
        let _guard = self.sequence.lock().await;
        let now = self.clock.now();

        let Some(entry) = self.store.get(phone).await else {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_not_found",
                "Verification attempted without a pending passcode"
            );
            return Err(OtpError::NotFoundOrExpired.into());
        };

        if entry.is_expired_at(now) {
            self.store.remove(phone).await;
            tracing::warn!(
                phone = %phone.masked(),
                session_id = %entry.id,
                event = "otp_expired",
                "Passcode expired before verification"
            );
            return Err(OtpError::Expired.into());
        }

        if entry.attempts_exhausted(self.config.max_attempts) {
            self.store.remove(phone).await;
            tracing::error!(
                phone = %phone.masked(),
                session_id = %entry.id,
                event = "max_attempts_exceeded",
                "Maximum verification attempts exceeded"
            );
            return Err(OtpError::TooManyAttempts.into());
        }

        if !digests_match(&entry.code_digest, &digest_code(code)) {
            let attempts = self.store.increment_attempts(phone).await.unwrap_or(entry.attempts + 1);
            tracing::warn!(
                phone = %phone.masked(),
                session_id = %entry.id,
                attempts = attempts,
                remaining_attempts = entry.remaining_attempts(self.config.max_attempts).saturating_sub(1),
                event = "otp_verification_failed",
                "Passcode verification failed"
            );
            return Err(OtpError::InvalidCode.into());
        }

        self.store.remove(phone).await;
        tracing::info!(
            phone = %phone.masked(),
            session_id = %entry.id,
            event = "otp_verified_success",
            "Passcode successfully verified"
        );
        Ok(())
    }

    /// Delete any pending entry for `phone`
    pub async fn invalidate(&self, phone: &PhoneKey) -> bool {
        let _guard = self.sequence.lock().await;
        let removed = self.store.remove(phone).await;
        if removed {
            tracing::debug!(
                phone = %phone.masked(),
                event = "otp_invalidated",
                "Invalidated pending passcode"
            );
        }
        removed
    }

    /// Copy of the stored entry, for inspection
    pub async fn entry(&self, phone: &PhoneKey) -> Option<OtpEntry> {
        self.store.get(phone).await
    }

    async fn admit(&self, phone: &PhoneKey) -> DomainResult<()> {
        if self.rate_limiter.admit(phone).await {
            return Ok(());
        }
        let retry_after_seconds = self.rate_limiter.retry_after(phone).await.unwrap_or(0);
        Err(OtpError::RateLimited {
            window_minutes: self.rate_limiter.window_minutes(),
            retry_after_seconds,
        }
        .into())
    }

    async fn store_fresh_code(&self, phone: &PhoneKey, resend_count: u32) -> DomainResult<IssuedOtp> {
        let code = generate_code()?;
        let entry = OtpEntry::new(
            digest_code(&code),
            resend_count,
            self.clock.now(),
            self.config.code_ttl(),
        );
        let issued = IssuedOtp {
            code,
            expires_at: entry.expires_at,
            resend_count,
            session_id: entry.id,
        };

        if let Some(replaced) = self.store.put(phone, entry).await {
            tracing::debug!(
                phone = %phone.masked(),
                replaced_session_id = %replaced.id,
                event = "invalidate_previous_code",
                "Replaced previous passcode"
            );
        }
        Ok(issued)
    }
}
