// tests/http_api.rs

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, routing::get, serve, Json, Router};
use quote_proxy::config::CorsConfig;
use quote_proxy::domain::exchange_rate::ExchangeRateApi;
use quote_proxy::domain::price::YahooFinanceProvider;
use quote_proxy::domain::QuoteService;
use quote_proxy::http_api::build_router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });
    addr
}

/// Stands in for both Yahoo Finance and exchangerate-api.
fn upstream() -> Router {
    Router::new()
        .route(
            "/v8/finance/chart/AAPL",
            get(|| async {
                Json(json!({
                    "chart": {"result": [{"meta": {"regularMarketPrice": 150.25}}], "error": null}
                }))
            }),
        )
        .route(
            "/v8/finance/chart/NOTAREALTICKER",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "chart": {
                            "result": null,
                            "error": {"code": "Not Found", "description": "no data found"}
                        }
                    })),
                )
            }),
        )
        .route(
            "/v4/latest/USD",
            get(|| async { Json(json!({"base": "USD", "rates": {"USD": 1, "JPY": 149.82}})) }),
        )
        .route(
            "/v4/latest/EUR",
            get(|| async { Json(json!({"base": "EUR", "rates": {"USD": 1.08}})) }),
        )
}

async fn spawn_proxy(price_base: Url, rate_url: Url) -> Url {
    let prices = YahooFinanceProvider::new(price_base, None).unwrap();
    let rates = ExchangeRateApi::new(rate_url, None).unwrap();
    let service = QuoteService::new(Arc::new(prices), Arc::new(rates));
    let addr = spawn(build_router(service, &CorsConfig::default())).await;
    Url::parse(&format!("http://{addr}/")).unwrap()
}

async fn get_json(url: Url) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn live_upstream() -> Url {
    let addr = spawn(upstream()).await;
    Url::parse(&format!("http://{addr}/")).unwrap()
}

#[tokio::test]
async fn price_lookup_end_to_end() {
    let upstream = live_upstream().await;
    let proxy = spawn_proxy(upstream.clone(), upstream.join("/v4/latest/USD").unwrap()).await;

    let (status, body) = get_json(proxy.join("price/AAPL").unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"price": 150.25}));

    let (status, body) = get_json(proxy.join("price/NOTAREALTICKER").unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "no data found"}));
}

#[tokio::test]
async fn exchange_rate_end_to_end() {
    let upstream = live_upstream().await;
    let proxy = spawn_proxy(upstream.clone(), upstream.join("/v4/latest/USD").unwrap()).await;

    let (status, body) = get_json(proxy.join("exchange-rate").unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"rate": 149.82}));
}

#[tokio::test]
async fn exchange_rate_without_jpy_is_error_payload() {
    let upstream = live_upstream().await;
    let proxy = spawn_proxy(upstream.clone(), upstream.join("/v4/latest/EUR").unwrap()).await;

    let (status, body) = get_json(proxy.join("exchange-rate").unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "missing field `rates.JPY`"}));
}

#[tokio::test]
async fn unreachable_upstreams_are_error_payloads() {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let dead = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
    drop(listener);

    let proxy = spawn_proxy(dead.clone(), dead.join("/v4/latest/USD").unwrap()).await;

    for path in ["exchange-rate", "price/AAPL"] {
        let (status, body) = get_json(proxy.join(path).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1, "unexpected body {body}");
        assert!(object["error"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn repeated_calls_keep_the_same_shape() {
    let upstream = live_upstream().await;
    let proxy = spawn_proxy(upstream.clone(), upstream.join("/v4/latest/USD").unwrap()).await;

    for _ in 0..3 {
        let (_, body) = get_json(proxy.join("price/AAPL").unwrap()).await;
        assert!(body["price"].is_number());
        assert!(body.get("error").is_none());
    }
}

#[tokio::test]
async fn simple_request_carries_cors_headers() {
    let upstream = live_upstream().await;
    let proxy = spawn_proxy(upstream.clone(), upstream.join("/v4/latest/USD").unwrap()).await;

    let response = reqwest::Client::new()
        .get(proxy.join("exchange-rate").unwrap())
        .header("Origin", "http://127.0.0.1:3000")
        .send()
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://127.0.0.1:3000");
    assert_eq!(headers["access-control-allow-credentials"], "true");
}
