use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use ipay88_bridge::config::Config;
use ipay88_bridge::gateways::Ipay88Client;
use ipay88_bridge::middleware::RequestId;
use ipay88_bridge::transactions::CallbackHandler;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (reads .env first, so RUST_LOG may come from there)
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("ipay88_bridge={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting iPay88 checkout bridge");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        merchant_code = %config.ipay88.merchant_code,
        gateway = %config.ipay88.base_url,
        currency = %config.ipay88.currency,
        "iPay88 gateway configured"
    );

    let ipay88_config = web::Data::new(config.ipay88.clone());
    let callback_handler = web::Data::new(CallbackHandler::new(
        Arc::new(Ipay88Client::from_config(&config.ipay88)),
        config.ipay88.merchant_code.clone(),
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(ipay88_config.clone())
            .app_data(callback_handler.clone())
            .configure(ipay88_bridge::configure)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
