// src/http_api/responses.rs

// 📦 External crates
use serde::Serialize;

// 🧠 Internal modules
use crate::domain::{Lookup, PriceLookup, RateLookup};

/// Body of `GET /price/{ticker}`: either `{"price": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceResponse {
    Price { price: Option<f64> },
    Error { error: String },
}

/// Body of `GET /exchange-rate`: either `{"rate": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateResponse {
    Rate { rate: f64 },
    Error { error: String },
}

impl From<PriceLookup> for PriceResponse {
    fn from(lookup: PriceLookup) -> Self {
        match lookup {
            Lookup::Success(price) => Self::Price { price },
            Lookup::Failure(error) => Self::Error { error },
        }
    }
}

impl From<RateLookup> for RateResponse {
    fn from(lookup: RateLookup) -> Self {
        match lookup {
            Lookup::Success(rate) => Self::Rate { rate },
            Lookup::Failure(error) => Self::Error { error },
        }
    }
}
