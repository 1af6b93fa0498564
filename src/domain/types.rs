// src/domain/types.rs

/// Longest upstream body excerpt carried in a [`ProviderError::Status`].
pub const MAX_BODY_EXCERPT: usize = 200;

/// Every failure a provider can raise. Callers only ever see the `Display`
/// text; the variants exist so the logs keep the cause.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    Http(String),
    #[error("Upstream responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Parse(String),
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("{0}")]
    Upstream(String),
    #[error("Ticker must not be empty")]
    EmptyTicker,
}

impl ProviderError {
    /// Non-success response whose body could not be understood. Only the
    /// first [`MAX_BODY_EXCERPT`] characters of `body` are kept.
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Outcome of one lookup. Failures are carried as plain messages so the HTTP
/// layer can hand them back inside a 200 response.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Success(T),
    Failure(String),
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T> From<Result<T, ProviderError>> for Lookup<T> {
    fn from(result: Result<T, ProviderError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

pub type PriceLookup = Lookup<Option<f64>>;
pub type RateLookup = Lookup<f64>;
