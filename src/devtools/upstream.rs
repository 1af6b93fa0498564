// src/devtools/upstream.rs

// 🌍 Standard library
use std::net::SocketAddr;

// 📦 External crates
use axum::{http::StatusCode, routing::get, serve, Json, Router};
use tokio::net::TcpListener;
use url::Url;

/// Serves `app` on an ephemeral local port and returns its base URL.
///
/// # Panics
/// Panics if the port cannot be bound. Intended for tests only.
pub async fn spawn_stub(app: Router) -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener
        .local_addr()
        .expect("Stub upstream has no local address");
    tokio::spawn(async move {
        serve(listener, app).await.expect("Stub upstream failed");
    });
    Url::parse(&format!("http://{addr}/")).expect("Stub upstream URL is valid")
}

/// Stub upstream answering `GET path` with `status` and a JSON `body`.
pub async fn spawn_json_stub(path: &str, status: StatusCode, body: serde_json::Value) -> Url {
    let app = Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    spawn_stub(app).await
}

/// Stub upstream answering `GET path` with a 200 and a raw text `body`.
pub async fn spawn_text_stub(path: &str, body: &'static str) -> Url {
    let app = Router::new().route(path, get(move || async move { body }));
    spawn_stub(app).await
}

/// Base URL of a local port nothing listens on.
///
/// # Panics
/// Panics if a port cannot be reserved. Intended for tests only.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to reserve a port");
    let addr = listener.local_addr().expect("Reserved port has no address");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("Unreachable URL is valid")
}
