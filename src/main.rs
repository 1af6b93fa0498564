// src/main.rs

use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use quote_proxy::config::AppConfig;
use quote_proxy::domain::exchange_rate::ExchangeRateApi;
use quote_proxy::domain::price::YahooFinanceProvider;
use quote_proxy::domain::QuoteService;
use quote_proxy::http_api::start_http_server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // Logging configuration
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("⚙️ Loaded configuration: {:?}", config);

    let timeout = config.upstream_timeout;
    let prices = match YahooFinanceProvider::new(config.price_base_url.clone(), timeout) {
        Ok(provider) => provider,
        Err(e) => {
            error!("❌ Failed to build market-data client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let rates = match ExchangeRateApi::new(config.exchange_rate_url.clone(), timeout) {
        Ok(provider) => provider,
        Err(e) => {
            error!("❌ Failed to build exchange-rate client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = QuoteService::new(Arc::new(prices), Arc::new(rates));
    start_http_server(&config, service).await;

    info!("Main function is exiting.");
    ExitCode::SUCCESS
}
