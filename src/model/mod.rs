// src/model/mod.rs

// 🌍 Standard library
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// 📦 External crates
use serde::Deserialize;

// 🧠 Internal modules
use crate::domain::ProviderError;

pub const BASE_CURRENCY: &str = "USD";
pub const QUOTE_CURRENCY: &str = "JPY";

/// Symbol of a tradable security, passed to the market-data provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> Result<Self, ProviderError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ProviderError::EmptyTicker);
        }
        Ok(Self(symbol))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latest rates relative to [`BASE_CURRENCY`], fetched fresh on every request.
///
/// `rates` is optional so that a body without the key parses and the lookup
/// reports the missing field instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    rates: Option<HashMap<String, f64>>,
}

impl RateTable {
    #[must_use]
    pub fn from_rates(rates: HashMap<String, f64>) -> Self {
        Self { rates: Some(rates) }
    }

    pub fn rate_for(&self, currency: &str) -> Result<f64, ProviderError> {
        let rates = self
            .rates
            .as_ref()
            .ok_or_else(|| ProviderError::MissingField("rates".into()))?;
        rates
            .get(currency)
            .copied()
            .ok_or_else(|| ProviderError::MissingField(format!("rates.{currency}")))
    }
}
