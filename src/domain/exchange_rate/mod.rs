// src/domain/exchange_rate/mod.rs

mod exchangerate_api;

use crate::domain::ProviderError;
use crate::model::RateTable;

pub use exchangerate_api::{ExchangeRateApi, DEFAULT_URL};

#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Latest rates relative to USD.
    async fn latest_rates(&self) -> Result<RateTable, ProviderError>;
}
