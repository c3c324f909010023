//! Mapping of domain errors onto HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use otp_core::errors::{DomainError, OtpError};
use otp_shared::{error_messages, ErrorResponse};

/// Build the response for a failed operation
///
/// Verification verdicts and issuance refusals are returned verbatim.
/// Delivery and infrastructure failures are logged and replaced by
/// `fallback`, the endpoint's generic message.
pub fn domain_error_response(error: &DomainError, fallback: &str) -> HttpResponse {
    let otp_error = match error {
        DomainError::Otp(OtpError::DeliveryFailure { .. })
        | DomainError::Internal { .. }
        | DomainError::Token(_) => return internal_error(error, fallback),
        DomainError::Otp(otp_error) => otp_error,
    };

    tracing::info!(
        error_code = otp_error.code(),
        event = "request_rejected",
        "Request rejected: {}",
        otp_error
    );

    let body = ErrorResponse::new(otp_error.to_string());
    match otp_error {
        OtpError::RateLimited { retry_after_seconds, .. } => {
            let mut response = HttpResponse::TooManyRequests();
            if *retry_after_seconds > 0 {
                response.insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()));
            }
            response.json(body)
        }
        OtpError::ResendLimitExceeded => HttpResponse::TooManyRequests().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn internal_error(error: &DomainError, fallback: &str) -> HttpResponse {
    tracing::error!(error = %error, event = "request_failed", "Request failed with internal error");
    HttpResponse::InternalServerError().json(ErrorResponse::new(fallback))
}

/// JSON extractor error handler: any unparseable body becomes a 400
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(
        path = %req.path(),
        error = %err,
        event = "invalid_request_body",
        "Rejected request body"
    );
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(error_messages::INVALID_REQUEST_BODY));
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_messages::NOT_FOUND))
}
