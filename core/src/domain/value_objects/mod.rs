//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod phone_key;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use phone_key::PhoneKey;
