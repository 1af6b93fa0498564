// src/domain/exchange_rate/exchangerate_api.rs

// 🌍 Standard library
use std::time::Duration;

// 📦 External crates
use tracing::{debug, info};
use url::Url;

// 🧠 Internal modules
use super::ExchangeRateProvider;
use crate::domain::ProviderError;
use crate::model::RateTable;

pub const DEFAULT_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// USD-based rates from exchangerate-api.com.
pub struct ExchangeRateApi {
    client: reqwest::Client,
    url: Url,
}

impl ExchangeRateApi {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url,
        })
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for ExchangeRateApi {
    async fn latest_rates(&self) -> Result<RateTable, ProviderError> {
        info!("📥 Sending GET request to exchangerate-api: {}", self.url);

        // The status is not checked: an error body simply lacks `rates`.
        let text = self.client.get(self.url.clone()).send().await?.text().await?;
        let table: RateTable = serde_json::from_str(&text)?;
        debug!("ExchangeRateApi::latest_rates -> {:?}", table);
        Ok(table)
    }
}
