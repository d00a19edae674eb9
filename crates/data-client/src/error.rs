// In crates/data-client/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Provider error: {code}: {description}")]
    ApiError { code: String, description: String },
    #[error("Provider returned a malformed chart payload for {symbol}")]
    MalformedPayload { symbol: String },
    #[error("Invalid series returned by provider: {0}")]
    InvalidSeries(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
