// src/http_api/mod.rs

mod cors;
mod request_handler;
mod responses;

pub use cors::cors_layer;
pub use request_handler::{build_router, start_http_server};
pub use responses::{PriceResponse, RateResponse};
