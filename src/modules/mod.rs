use actix_web::web;

pub mod gateways;
pub mod health;
pub mod payments;
pub mod transactions;

/// Register every route of the service.
///
/// Expects `web::Data<Ipay88Config>` and `web::Data<CallbackHandler>` to be
/// registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(payments::configure)
        .configure(transactions::configure);
}
