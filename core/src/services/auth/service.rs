//! Authentication flow over the passcode lifecycle

use std::sync::Arc;

use otp_shared::PhoneConfig;

use crate::domain::value_objects::{AuthResponse, PhoneKey};
use crate::errors::{DomainResult, OtpError};
use crate::services::otp::{IssuedOtp, OtpDeliveryTrait, OtpService};
use crate::services::token::TokenService;

use super::types::OtpDispatch;

/// Authentication service handling the send, resend and verify flows
pub struct AuthService {
    otp_service: Arc<OtpService>,
    delivery: Arc<dyn OtpDeliveryTrait>,
    token_service: Arc<TokenService>,
    phone_config: PhoneConfig,
}

impl AuthService {
    /// Creates a new authentication service
    ///
    /// # Arguments
    ///
    /// * `otp_service` - Passcode lifecycle manager
    /// * `delivery` - Outbound message channel
    /// * `token_service` - Session token signer
    /// * `phone_config` - Accepted phone format
    pub fn new(
        otp_service: Arc<OtpService>,
        delivery: Arc<dyn OtpDeliveryTrait>,
        token_service: Arc<TokenService>,
        phone_config: PhoneConfig,
    ) -> Self {
        Self {
            otp_service,
            delivery,
            token_service,
            phone_config,
        }
    }

    pub fn otp_service(&self) -> &OtpService {
        &self.otp_service
    }

    /// Validate a raw phone string into a key
    pub fn parse_phone(&self, raw: &str) -> DomainResult<PhoneKey> {
        PhoneKey::parse(raw, &self.phone_config).map_err(|e| {
            tracing::debug!(event = "invalid_phone_format", "Rejected malformed phone number");
            e.into()
        })
    }

    /// Issue a passcode and deliver it
    ///
    /// This method:
    /// 1. Validates the phone number format
    /// 2. Issues a fresh code through the rate limiter
    /// 3. Delivers the plaintext code
    ///
    /// A delivery failure leaves the stored entry and the consumed rate
    /// limit slot in place.
    pub async fn send_otp(&self, raw_phone: &str) -> DomainResult<OtpDispatch> {
        let phone = self.parse_phone(raw_phone)?;
        let issued = self.otp_service.issue(&phone).await?;
        self.deliver(&phone, issued).await
    }

    /// Reissue a passcode within the current session and deliver it
    pub async fn resend_otp(&self, raw_phone: &str) -> DomainResult<OtpDispatch> {
        let phone = self.parse_phone(raw_phone)?;
        let issued = self.otp_service.resend(&phone).await?;
        self.deliver(&phone, issued).await
    }

    /// Verify a submitted passcode and sign a session token
    ///
    /// A phone that does not parse can never have a pending entry, so it
    /// gets the same verdict as a missing one. The entry is explicitly
    /// invalidated after a match so the code cannot be replayed even if the
    /// success path runs twice.
    pub async fn verify_otp(&self, raw_phone: &str, code: &str) -> DomainResult<AuthResponse> {
        let phone = self
            .parse_phone(raw_phone)
            .map_err(|_| OtpError::NotFoundOrExpired)?;
        self.otp_service.verify(&phone, code).await?;
        self.otp_service.invalidate(&phone).await;

        let response = self.token_service.issue_token(&phone)?;
        tracing::info!(
            phone = %phone.masked(),
            event = "session_token_issued",
            "Issued session token after verification"
        );
        Ok(response)
    }

    async fn deliver(&self, phone: &PhoneKey, issued: IssuedOtp) -> DomainResult<OtpDispatch> {
        let message_id = self
            .delivery
            .send_otp(phone, &issued.code)
            .await
            .map_err(|reason| {
                tracing::error!(
                    phone = %phone.masked(),
                    session_id = %issued.session_id,
                    error = %reason,
                    event = "otp_delivery_failed",
                    "Failed to deliver passcode"
                );
                OtpError::DeliveryFailure { reason }
            })?;

        tracing::info!(
            phone = %phone.masked(),
            session_id = %issued.session_id,
            message_id = %message_id,
            event = "otp_delivered",
            "Delivered passcode"
        );

        Ok(OtpDispatch {
            message_id,
            expires_at: issued.expires_at,
            resend_count: issued.resend_count,
            session_id: issued.session_id,
        })
    }
}
