//! Delivery Provider Interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// Message text carrying a passcode
pub fn otp_message(code: &str, ttl_minutes: i64) -> String {
    format!(
        "Your verification code is {}. It expires in {} minutes. Do not share it with anyone.",
        code, ttl_minutes
    )
}

/// Outbound message channel
///
/// Implementations include:
/// - Mock implementation for development
/// - Unconfigured placeholder that refuses to send
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Send a text message to a phone number
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_message(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a passcode using the standard message text
    async fn send_otp(&self, phone_number: &str, code: &str, ttl_minutes: i64) -> Result<String, InfrastructureError> {
        self.send_message(phone_number, &otp_message(code, ttl_minutes)).await
    }

    /// Provider name, for logs
    fn provider_name(&self) -> &str;

    /// Whether the provider can currently send
    fn is_available(&self) -> bool {
        true
    }
}
