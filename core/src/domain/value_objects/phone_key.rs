//! Validated phone number used to key every per-phone record.

use std::fmt;

use otp_shared::phone::{is_valid_phone, mask_phone_number};
use otp_shared::PhoneConfig;
use serde::{Deserialize, Serialize};

use crate::errors::OtpError;

/// A phone number that passed format validation
///
/// Only constructible through [`PhoneKey::parse`], so holding one proves the
/// number has the configured prefix, length and digit-only body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneKey(String);

impl PhoneKey {
    /// Validate a raw phone string against the configured format
    ///
    /// The input is used exactly as given: no trimming or normalisation.
    pub fn parse(raw: &str, config: &PhoneConfig) -> Result<Self, OtpError> {
        if is_valid_phone(raw, &config.country_prefix, config.total_length) {
            Ok(Self(raw.to_string()))
        } else {
            Err(OtpError::InvalidPhoneFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked rendering for log fields
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }
}

impl fmt::Display for PhoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
