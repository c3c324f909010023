//! Delivery Trait Adapter
//!
//! Implements the core `OtpDeliveryTrait` on top of any infrastructure
//! `MessageService`.

use async_trait::async_trait;
use otp_core::services::OtpDeliveryTrait;
use otp_core::PhoneKey;

use super::message_service::MessageService;

/// Adapter that implements the core delivery trait for a message provider
pub struct DeliveryAdapter {
    inner: Box<dyn MessageService>,
    ttl_minutes: i64,
}

impl DeliveryAdapter {
    /// Wrap a provider; `ttl_minutes` is quoted in the message text
    pub fn new(inner: Box<dyn MessageService>, ttl_minutes: i64) -> Self {
        Self { inner, ttl_minutes }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl OtpDeliveryTrait for DeliveryAdapter {
    async fn send_otp(&self, phone: &PhoneKey, code: &str) -> Result<String, String> {
        self.inner
            .send_otp(phone.as_str(), code, self.ttl_minutes)
            .await
            .map_err(|e| e.to_string())
    }
}
