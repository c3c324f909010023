//! Traits for passcode storage and delivery integration

use async_trait::async_trait;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::domain::value_objects::PhoneKey;

/// Owner of the per-phone pending passcode entries
///
/// Callers only ever receive copies; mutation goes through these methods.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Copy of the entry for `phone`, expired or not
    async fn get(&self, phone: &PhoneKey) -> Option<OtpEntry>;
    /// Store `entry`, replacing and returning any previous entry for `phone`
    async fn put(&self, phone: &PhoneKey, entry: OtpEntry) -> Option<OtpEntry>;
    /// Add one failed attempt, returning the new count if the entry exists
    async fn increment_attempts(&self, phone: &PhoneKey) -> Option<u32>;
    /// Delete the entry, returning whether one existed
    async fn remove(&self, phone: &PhoneKey) -> bool;
    /// Number of stored entries, including expired ones not yet reclaimed
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Trait for outbound passcode delivery
#[async_trait]
pub trait OtpDeliveryTrait: Send + Sync {
    /// Deliver a passcode, returning the provider's message identifier
    async fn send_otp(&self, phone: &PhoneKey, code: &str) -> Result<String, String>;
}
