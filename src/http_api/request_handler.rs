// src/http_api/request_handler.rs

// 📦 External crates
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    serve, Json, Router,
};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

// 🧠 Internal modules
use super::cors::cors_layer;
use super::responses::{PriceResponse, RateResponse};
use crate::config::{AppConfig, CorsConfig};
use crate::domain::QuoteService;

pub fn build_router(service: QuoteService, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/price/{ticker}", get(price_handler))
        .route("/exchange-rate", get(exchange_rate_handler))
        .layer(cors_layer(cors))
        .with_state(service)
}

/// Serves the API on `config.addr` until Ctrl-C.
///
/// # Panics
/// Panics if the address cannot be bound or the server stops with an error.
pub async fn start_http_server(config: &AppConfig, service: QuoteService) {
    let app = build_router(service, &config.cors);
    let listener = TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind address");
    info!("📡 HTTP server listening on http://{}", config.addr);
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
    info!("🛑 HTTP server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("❌ Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

// Both handlers always answer 200; failures travel in the body.

pub async fn price_handler(
    State(service): State<QuoteService>,
    ticker: Result<Path<String>, PathRejection>,
) -> Json<PriceResponse> {
    let Path(ticker) = match ticker {
        Ok(ticker) => ticker,
        Err(rejection) => {
            warn!("❌ Unusable ticker in path: {}", rejection.body_text());
            return Json(PriceResponse::Error {
                error: rejection.body_text(),
            });
        }
    };
    debug!("GET /price/{}", ticker);
    Json(service.lookup_price(&ticker).await.into())
}

pub async fn exchange_rate_handler(State(service): State<QuoteService>) -> Json<RateResponse> {
    debug!("GET /exchange-rate");
    Json(service.lookup_exchange_rate().await.into())
}
