// src/domain/quote.rs

// 🌍 Standard library
use std::sync::Arc;

// 📦 External crates
use tracing::warn;

// 🧠 Internal modules
use crate::domain::exchange_rate::ExchangeRateProvider;
use crate::domain::price::MarketDataProvider;
use crate::domain::{Lookup, PriceLookup, ProviderError, RateLookup};
use crate::model::{Ticker, QUOTE_CURRENCY};

/// Runs both lookups against whichever providers it was built with.
///
/// Provider failures never escape: they are logged and returned as
/// [`Lookup::Failure`] carrying the error's message.
#[derive(Clone)]
pub struct QuoteService {
    prices: Arc<dyn MarketDataProvider>,
    rates: Arc<dyn ExchangeRateProvider>,
}

impl QuoteService {
    pub fn new(prices: Arc<dyn MarketDataProvider>, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { prices, rates }
    }

    pub async fn lookup_price(&self, symbol: &str) -> PriceLookup {
        let result = match Ticker::new(symbol) {
            Ok(ticker) => self.prices.current_price(&ticker).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!("❌ Price lookup for {:?} failed: {:?}", symbol, e);
        }
        Lookup::from(result)
    }

    pub async fn lookup_exchange_rate(&self) -> RateLookup {
        let result = self.fetch_quote_rate().await;
        if let Err(e) = &result {
            warn!("❌ Exchange rate lookup failed: {:?}", e);
        }
        Lookup::from(result)
    }

    async fn fetch_quote_rate(&self) -> Result<f64, ProviderError> {
        self.rates.latest_rates().await?.rate_for(QUOTE_CURRENCY)
    }
}
