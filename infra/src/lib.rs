//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the passcode lifecycle
//! delegates to. Currently that is outbound delivery of the plaintext code:
//!
//! - **Delivery**: provider trait, a console mock for development, an
//!   unconfigured provider that always fails, and the adapter onto the core
//!   delivery trait

/// Delivery module - outbound passcode messages
pub mod delivery;

pub use delivery::{create_message_service, DeliveryAdapter, MessageService};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Delivery provider error
    #[error("Delivery error: {0}")]
    Delivery(String),
}
