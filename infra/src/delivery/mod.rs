//! Passcode Delivery Module
//!
//! Providers that carry the plaintext passcode to the user.
//!
//! ## Providers
//!
//! - **mock**: prints the message to the console, for development
//! - **none**: no provider configured, every send fails

pub mod adapter;
pub mod message_service;
pub mod mock_delivery;
pub mod unconfigured;

pub use adapter::DeliveryAdapter;
pub use message_service::{otp_message, MessageService};
pub use mock_delivery::MockMessageService;
pub use unconfigured::UnconfiguredMessageService;

use otp_shared::DeliveryConfig;


/// Create a delivery provider based on configuration
///
/// Unknown provider names fall back to the unconfigured provider, so a typo
/// surfaces as failed sends instead of silently printing codes.
///
/// # Arguments
///
/// * `config` - Delivery configuration naming the provider
///
/// # Returns
///
/// A boxed delivery provider
pub fn create_message_service(config: &DeliveryConfig) -> Box<dyn MessageService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockMessageService::with_options(config.console_output, false)),
        "none" | "" => Box::new(UnconfiguredMessageService::new()),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown delivery provider, passcodes will not be delivered"
            );
            Box::new(UnconfiguredMessageService::new())
        }
    }
}
