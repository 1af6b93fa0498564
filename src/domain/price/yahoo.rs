// src/domain/price/yahoo.rs

// 🌍 Standard library
use std::time::Duration;

// 📦 External crates
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

// 🧠 Internal modules
use super::MarketDataProvider;
use crate::domain::ProviderError;
use crate::model::Ticker;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// Yahoo answers the default reqwest agent with 429s.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/120.0 Safari/537.36"
);

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Current prices from the Yahoo Finance chart endpoint.
pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn chart_url(&self, ticker: &Ticker) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::Http(format!("Cannot use {} as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(&["v8", "finance", "chart", ticker.as_str()]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn current_price(&self, ticker: &Ticker) -> Result<Option<f64>, ProviderError> {
        let url = self.chart_url(ticker)?;
        info!("📥 Sending GET request to Yahoo Finance: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Unknown tickers come back as a 404 with a JSON error body, so the
        // status only matters when the body is not a chart envelope.
        let envelope: ChartEnvelope = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => return Err(ProviderError::status(status.as_u16(), &text)),
        };
        debug!("YahooFinanceProvider::current_price {} -> {:?}", ticker, envelope);
        price_from_chart(envelope)
    }
}

fn price_from_chart(envelope: ChartEnvelope) -> Result<Option<f64>, ProviderError> {
    let Chart { result, error } = envelope.chart;
    if let Some(error) = error {
        let message = error
            .description
            .or(error.code)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(ProviderError::Upstream(message));
    }
    Ok(result
        .and_then(|results| results.into_iter().next())
        .and_then(|first| first.meta.regular_market_price))
}
