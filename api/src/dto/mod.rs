pub mod otp;

pub use otp::{success_messages, ResendOtpRequest, SendOtpRequest, VerifyOtpRequest};
