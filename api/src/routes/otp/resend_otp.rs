use actix_web::{web, HttpResponse};
use otp_shared::phone::mask_phone_number;
use otp_shared::{error_messages, ErrorResponse, SuccessResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{success_messages, ResendOtpRequest};
use crate::handlers::domain_error_response;

/// Handler for POST /api/resend-otp
///
/// Same shapes as send, plus `429 { "error": "Maximum resend limit reached" }`
/// once the session has used all its issuances.
pub async fn resend_otp(state: web::Data<AppState>, request: web::Json<ResendOtpRequest>) -> HttpResponse {
    let request = request.into_inner();
    let phone = match (request.validate(), request.phone) {
        (Ok(()), Some(phone)) => phone,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(error_messages::PHONE_REQUIRED));
        }
    };

    match state.auth_service.resend_otp(&phone).await {
        Ok(dispatch) => {
            tracing::info!(
                phone = %mask_phone_number(&phone),
                message_id = %dispatch.message_id,
                resend_count = dispatch.resend_count,
                "resend-otp succeeded"
            );
            HttpResponse::Ok().json(SuccessResponse::message(success_messages::OTP_RESENT))
        }
        Err(error) => domain_error_response(&error, error_messages::RESEND_FAILED),
    }
}
