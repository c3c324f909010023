//! Passcode generation and digesting

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::domain::entities::CODE_LENGTH;
use crate::errors::{DomainError, DomainResult};

const LOWEST_CODE: u32 = 10u32.pow(CODE_LENGTH as u32 - 1);
const CODE_SPAN: u32 = 10u32.pow(CODE_LENGTH as u32) - LOWEST_CODE;
// Largest multiple of CODE_SPAN that fits in a u32; draws at or above it are rejected
const ACCEPT_BELOW: u32 = u32::MAX - (u32::MAX % CODE_SPAN);

/// Generate a six-digit passcode in `100000..=999999`
///
/// Draws from the OS CSPRNG and rejects out-of-range samples so every code
/// is equally likely. Fails only if the entropy source does.
pub fn generate_code() -> DomainResult<String> {
    let mut rng = OsRng;
    let mut bytes = [0u8; 4];
    loop {
        rng.try_fill_bytes(&mut bytes).map_err(|e| DomainError::Internal {
            message: format!("Entropy source unavailable: {}", e),
        })?;
        let sample = u32::from_le_bytes(bytes);
        if sample < ACCEPT_BELOW {
            return Ok((LOWEST_CODE + sample % CODE_SPAN).to_string());
        }
    }
}

/// Lowercase hex SHA-256 of the code's UTF-8 bytes
pub fn digest_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.as_bytes()))
}

/// Constant-time digest comparison
pub fn digests_match(stored: &str, candidate: &str) -> bool {
    stored.len() == candidate.len() && constant_time_eq(stored.as_bytes(), candidate.as_bytes())
}
