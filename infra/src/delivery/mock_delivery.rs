//! Mock Delivery Provider
//!
//! Prints messages to the console instead of sending them.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use otp_shared::phone::mask_phone_number;
use tracing::{info, warn};
use uuid::Uuid;

use super::message_service::MessageService;
use crate::InfrastructureError;

/// Mock delivery provider for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Generates mock message IDs
/// - Tracks message count and the last message for testing
#[derive(Clone)]
pub struct MockMessageService {
    message_count: Arc<AtomicU64>,
    last_message: Arc<Mutex<Option<(String, String)>>>,
    simulate_failure: Arc<AtomicBool>,
    console_output: bool,
}

impl MockMessageService {
    /// Create a new mock provider with console output enabled
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock provider with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_message: Arc::new(Mutex::new(None)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Recipient and text of the most recent message
    pub fn last_message(&self) -> Option<(String, String)> {
        self.last_message
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockMessageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageService for MockMessageService {
    async fn send_message(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked_phone = mask_phone_number(phone_number);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(provider = "mock", phone = %masked_phone, "Mock delivery simulating failure");
            return Err(InfrastructureError::Delivery(
                "Simulated delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_message.lock().unwrap_or_else(|e| e.into_inner()) =
            Some((phone_number.to_string(), message.to_string()));

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK DELIVERY - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", phone_number);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "delivery",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "Message sent (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
