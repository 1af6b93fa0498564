// src/config.rs

// 🌍 Standard library
use std::net::SocketAddr;
use std::time::Duration;

// 📦 External crates
use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

// 🧠 Internal modules
use crate::domain::exchange_rate::DEFAULT_URL as DEFAULT_EXCHANGE_RATE_URL;
use crate::domain::price::DEFAULT_BASE_URL as DEFAULT_PRICE_BASE_URL;

pub const ENV_ADDR: &str = "QUOTE_PROXY_ADDR";
pub const ENV_CORS_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_CORS_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_PRICE_BASE_URL: &str = "PRICE_PROVIDER_BASE_URL";
pub const ENV_EXCHANGE_RATE_URL: &str = "EXCHANGE_RATE_URL";
pub const ENV_UPSTREAM_TIMEOUT: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    Addr { var: &'static str, value: String },
    #[error("{var}: invalid URL {value:?}: {reason}")]
    Url {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("{var}: expected true or false, got {value:?}")]
    Bool { var: &'static str, value: String },
    #[error("{var}: expected a positive whole number of seconds, got {value:?}")]
    Timeout { var: &'static str, value: String },
    #[error("{var}: invalid origin {value:?}")]
    Origin { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Cross-origin policy. Methods and headers are always unrestricted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub cors: CorsConfig,
    pub price_base_url: Url,
    pub exchange_rate_url: Url,
    /// `None` leaves upstream calls without a timeout.
    pub upstream_timeout: Option<Duration>,
}

impl AppConfig {
    /// Reads the configuration from the process environment. Call
    /// `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let addr_value = get(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value.parse().map_err(|_| ConfigError::Addr {
            var: ENV_ADDR,
            value: addr_value.clone(),
        })?;

        let allowed_origins = match get(ENV_CORS_ORIGINS) {
            None => AllowedOrigins::Any,
            Some(value) => parse_origins(&value)?,
        };
        let allow_credentials = match get(ENV_CORS_CREDENTIALS) {
            None => true,
            Some(value) => parse_bool(ENV_CORS_CREDENTIALS, &value)?,
        };

        let price_base_url = parse_url(
            ENV_PRICE_BASE_URL,
            &get(ENV_PRICE_BASE_URL).unwrap_or_else(|| DEFAULT_PRICE_BASE_URL.to_string()),
        )?;
        let exchange_rate_url = parse_url(
            ENV_EXCHANGE_RATE_URL,
            &get(ENV_EXCHANGE_RATE_URL).unwrap_or_else(|| DEFAULT_EXCHANGE_RATE_URL.to_string()),
        )?;

        let upstream_timeout = get(ENV_UPSTREAM_TIMEOUT)
            .map(|value| {
                value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or(ConfigError::Timeout {
                        var: ENV_UPSTREAM_TIMEOUT,
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            addr,
            cors: CorsConfig {
                allowed_origins,
                allow_credentials,
            },
            price_base_url,
            exchange_rate_url,
            upstream_timeout,
        })
    }
}

fn parse_origins(value: &str) -> Result<AllowedOrigins, ConfigError> {
    if value == "*" {
        return Ok(AllowedOrigins::Any);
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Origin {
                var: ENV_CORS_ORIGINS,
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Bool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::Url {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
