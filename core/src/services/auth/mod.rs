//! Authentication service module
//!
//! Ties the passcode lifecycle to delivery and session token issuance:
//! - Phone format validation
//! - Send and resend with delivery of the plaintext code
//! - Verification followed by token signing

mod service;
mod types;


pub use service::AuthService;
pub use types::OtpDispatch;
