//! Passcode route handlers
//!
//! - `POST /api/send-otp`: issue and deliver a code
//! - `POST /api/verify-otp`: check a code and return a session token
//! - `POST /api/resend-otp`: reissue within the current session

pub mod resend_otp;
pub mod send_otp;
pub mod verify_otp;

pub use resend_otp::resend_otp;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
