use actix_web::{web, HttpResponse};
use otp_shared::phone::mask_phone_number;
use otp_shared::{error_messages, ErrorResponse, SuccessResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{success_messages, SendOtpRequest};
use crate::handlers::domain_error_response;

/// Handler for POST /api/send-otp
///
/// # Request Body
///
/// ```json
/// { "phone": "+911234567890" }
/// ```
///
/// # Responses
///
/// - `200` `{ "success": true, "message": "OTP sent successfully on WhatsApp" }`
/// - `400` invalid or missing phone
/// - `429` rate limited, with `Retry-After`
/// - `500` delivery or infrastructure failure
pub async fn send_otp(state: web::Data<AppState>, request: web::Json<SendOtpRequest>) -> HttpResponse {
    let request = request.into_inner();
    let phone = match (request.validate(), request.phone) {
        (Ok(()), Some(phone)) => phone,
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_messages::INVALID_PHONE_FORMAT));
        }
    };

    match state.auth_service.send_otp(&phone).await {
        Ok(dispatch) => {
            tracing::info!(
                phone = %mask_phone_number(&phone),
                message_id = %dispatch.message_id,
                "send-otp succeeded"
            );
            HttpResponse::Ok().json(SuccessResponse::message(success_messages::OTP_SENT))
        }
        Err(error) => domain_error_response(&error, error_messages::SEND_FAILED),
    }
}
