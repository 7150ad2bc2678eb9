use super::super::services::{CallbackHandler, CallbackOutcome};
use crate::modules::gateways::CallbackPayload;
use actix_web::{http::header::ContentType, web, Either, HttpResponse};
use tracing::warn;

pub const CALLBACK_PATH: &str = "/ipay88Response";

/// Receive the iPay88 payment callback
///
/// POST /ipay88Response
///
/// Forwards `order_id`, `transaction_id`, `amount` and `status` with the
/// merchant code to the gateway's verification endpoint. The callback itself
/// is not signature-checked. A body that is neither a JSON object nor a
/// urlencoded form is treated as an empty callback, so the gateway still
/// decides the outcome.
///
/// # Returns
/// * `200 OK` - "Payment successful"
/// * `400 Bad Request` - "Payment failed"
/// * `500 Internal Server Error` - "Error verifying payment"
pub async fn payment_callback(
    body: Option<Either<web::Json<CallbackPayload>, web::Form<CallbackPayload>>>,
    handler: web::Data<CallbackHandler>,
) -> HttpResponse {
    let callback = match body {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => form.into_inner(),
        None => {
            warn!("Unparsable callback body, forwarding merchant code only");
            CallbackPayload::default()
        }
    };

    let (mut response, message) = match handler.process_callback(callback).await {
        CallbackOutcome::Confirmed => (HttpResponse::Ok(), "Payment successful"),
        CallbackOutcome::Rejected { .. } => (HttpResponse::BadRequest(), "Payment failed"),
        CallbackOutcome::VerificationError { .. } => (
            HttpResponse::InternalServerError(),
            "Error verifying payment",
        ),
    };

    response.content_type(ContentType::plaintext()).body(message)
}

/// Configure payment callback routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(CALLBACK_PATH, web::post().to(payment_callback));
}
