//! Common type definitions shared across the server

pub mod response;

pub use response::{HealthResponse, SuccessResponse};
