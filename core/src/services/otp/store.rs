//! In-memory passcode store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::domain::value_objects::PhoneKey;

use super::traits::OtpStoreTrait;

/// Process-local store; entries are lost on restart.
///
/// Expired entries are not swept. They linger until a verification attempt
/// or a fresh issuance overwrites them.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    entries: RwLock<HashMap<PhoneKey, OtpEntry>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn get(&self, phone: &PhoneKey) -> Option<OtpEntry> {
        self.entries.read().await.get(phone).cloned()
    }

    async fn put(&self, phone: &PhoneKey, entry: OtpEntry) -> Option<OtpEntry> {
        self.entries.write().await.insert(phone.clone(), entry)
    }

    async fn increment_attempts(&self, phone: &PhoneKey) -> Option<u32> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(phone)?;
        entry.attempts += 1;
        Some(entry.attempts)
    }

    async fn remove(&self, phone: &PhoneKey) -> bool {
        self.entries.write().await.remove(phone).is_some()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
