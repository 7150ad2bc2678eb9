use actix_web::{
    http::{header::ContentType, Method},
    middleware::DefaultHeaders,
    web, Either, HttpResponse,
};
use tracing::{info, warn};

use crate::config::Ipay88Config;
use crate::core::Result;
use crate::modules::payments::models::CheckoutRequest;
use crate::modules::payments::services::RedirectForm;

pub const CREATE_PAYMENT_PATH: &str = "/createIpay88Payment";

/// Create an iPay88 payment
/// POST /createIpay88Payment
///
/// Accepts checkout details as JSON or a urlencoded form and answers with an
/// HTML page that posts the signed request to the gateway's entry page.
///
/// # Returns
/// * `200 OK` - `text/html` auto-submit document
/// * `400 Bad Request` - missing field, unparsable body or invalid amount
pub async fn create_payment(
    body: Either<web::Json<CheckoutRequest>, web::Form<CheckoutRequest>>,
    config: web::Data<Ipay88Config>,
) -> Result<HttpResponse> {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let checkout = request
        .validate(config.currency)
        .inspect_err(|e| warn!(error = %e, "Rejected checkout request"))?;

    let form = RedirectForm::build(&config, &checkout);

    info!(
        ref_no = %checkout.ref_no,
        amount = %checkout.amount,
        amount_minor = %checkout.amount_minor,
        currency = %checkout.currency,
        "Built iPay88 redirect form"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(form.render()))
}

/// CORS preflight, answered before any checkout handling
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Configure payment initiation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(CREATE_PAYMENT_PATH)
            .wrap(cors_headers())
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::post().to(create_payment)),
    );
}
