//! # Cardpay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the Braintree gateway adapter
//! - Create the payment service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardpay_gateway::build_gateway;
use cardpay_hex::{PaymentService, inbound::HttpServer};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "info,cardpay_app=debug,cardpay_hex=debug,cardpay_gateway=info".into()
    });

    // LOG_FORMAT=json switches to one JSON object per line
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting cardpay server on port {}", config.port);
    tracing::info!("Using Braintree API: {}", config.braintree.api_url);

    // Build the PSP adapter (one pooled HTTP client for all requests)
    let gateway = build_gateway(config.braintree)?;

    // Create the payment service
    let service = PaymentService::new(gateway);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
