// src/domain/mod.rs

pub mod exchange_rate;
pub mod price;
pub mod quote;
pub mod types;

pub use quote::QuoteService;
pub use types::{Lookup, PriceLookup, ProviderError, RateLookup};
