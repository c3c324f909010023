//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// '+' followed by digits only
static INTERNATIONAL_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]+$").expect("static phone regex is valid")
});

/// Check a phone number against a fixed international prefix and total length
///
/// `+911234567890` is valid for prefix `+91` and length 13; spaces, dashes,
/// other prefixes and any other length are rejected.
pub fn is_valid_phone(phone: &str, country_prefix: &str, total_length: usize) -> bool {
    phone.len() == total_length
        && phone.starts_with(country_prefix)
        && INTERNATIONAL_DIGITS_REGEX.is_match(phone)
}

/// Mask a phone number for logging (e.g., +91******7890)
pub fn mask_phone_number(phone: &str) -> String {
    let visible_digits = 4;
    if phone.len() <= visible_digits || !phone.is_ascii() {
        return "*".repeat(phone.chars().count());
    }

    let last_digits = &phone[phone.len() - visible_digits..];
    match phone.strip_prefix('+') {
        Some(rest) if rest.len() > visible_digits + 2 => {
            format!("+{}{}{}", &rest[..2], "*".repeat(rest.len() - 2 - visible_digits), last_digits)
        }
        _ => format!("{}{}", "*".repeat(phone.len() - visible_digits), last_digits),
    }
}
