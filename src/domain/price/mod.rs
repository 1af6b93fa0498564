// src/domain/price/mod.rs

mod yahoo;

use crate::domain::ProviderError;
use crate::model::Ticker;

pub use yahoo::{YahooFinanceProvider, DEFAULT_BASE_URL};

/// Anything that can answer "what is this ticker trading at right now".
///
/// `Ok(None)` means the provider knows the ticker but has no current price.
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn current_price(&self, ticker: &Ticker) -> Result<Option<f64>, ProviderError>;
}
