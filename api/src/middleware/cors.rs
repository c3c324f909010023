//! CORS middleware configuration for cross-origin requests.
//!
//! Browser and mobile clients call the OTP endpoints cross-origin. The
//! allowed origins come from `CorsConfig`: `"*"` accepts any origin,
//! otherwise only the listed ones are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use otp_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|o| o.trim()).filter(|o| !o.is_empty()) {
            tracing::info!(origin = origin, "Adding allowed CORS origin");
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
