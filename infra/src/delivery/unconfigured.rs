//! Placeholder provider used when no delivery channel is configured

use async_trait::async_trait;
use otp_shared::phone::mask_phone_number;

use super::message_service::MessageService;
use crate::InfrastructureError;

/// Refuses every send
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredMessageService;

impl UnconfiguredMessageService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageService for UnconfiguredMessageService {
    async fn send_message(&self, phone_number: &str, _message: &str) -> Result<String, InfrastructureError> {
        tracing::error!(
            provider = "none",
            phone = %mask_phone_number(phone_number),
            "Delivery attempted without a configured provider"
        );
        Err(InfrastructureError::Config(
            "Delivery provider not configured".to_string(),
        ))
    }

    fn provider_name(&self) -> &str {
        "None"
    }

    fn is_available(&self) -> bool {
        false
    }
}
