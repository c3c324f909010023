use serde::{Deserialize, Serialize};
use validator::Validate;

/// Messages returned in the `message` field of success responses
pub mod success_messages {
    pub const OTP_SENT: &str = "OTP sent successfully on WhatsApp";
    pub const OTP_RESENT: &str = "OTP resent successfully on WhatsApp";
    pub const OTP_VERIFIED: &str = "OTP verified successfully";
}

/// Body of `POST /api/send-otp`
///
/// Fields are optional so a missing phone reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Full international number, e.g. "+911234567890"
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    /// Six-digit code; format is not checked here, a malformed code simply fails to match
    #[validate(required, length(min = 1))]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}
