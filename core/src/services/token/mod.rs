//! Session token module
//!
//! Signs the HS256 JWT handed out after a successful passcode verification.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{SessionClaims, TokenService};
