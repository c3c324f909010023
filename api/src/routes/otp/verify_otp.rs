use actix_web::{web, HttpResponse};
use otp_shared::{error_messages, ErrorResponse, SuccessResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{success_messages, VerifyOtpRequest};
use crate::handlers::domain_error_response;

/// Handler for POST /api/verify-otp
///
/// # Request Body
///
/// ```json
/// { "phone": "+911234567890", "otp": "482910" }
/// ```
///
/// # Responses
///
/// - `200` `{ "success": true, "message": "OTP verified successfully", "token": "<jwt>" }`
/// - `400` missing fields, malformed phone, or a verification verdict
/// - `500` token signing failure
pub async fn verify_otp(state: web::Data<AppState>, request: web::Json<VerifyOtpRequest>) -> HttpResponse {
    let request = request.into_inner();
    let (phone, otp) = match (request.validate(), request.phone, request.otp) {
        (Ok(()), Some(phone), Some(otp)) => (phone, otp),
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_messages::PHONE_AND_OTP_REQUIRED));
        }
    };

    match state.auth_service.verify_otp(&phone, &otp).await {
        Ok(auth) => HttpResponse::Ok().json(SuccessResponse::with_token(
            success_messages::OTP_VERIFIED,
            auth.token,
        )),
        Err(error) => domain_error_response(&error, error_messages::VERIFY_FAILED),
    }
}
