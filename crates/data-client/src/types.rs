// In crates/data-client/src/types.rs

use reqwest::Client;
use serde::Deserialize;

/// The client for fetching daily price history from the Yahoo Finance
/// chart endpoint.
#[derive(Debug, Clone)]
pub struct DataClient {
    /// The persistent HTTP client.
    pub http_client: Client,
    /// The base URL of the chart endpoint.
    pub base_url: String,
}

// --- Raw chart response structs ---
//
// Shape of `GET /v8/finance/chart/{symbol}`: parallel arrays of epoch-second
// timestamps and OHLCV quote values, with nulls where the provider has a gap.

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}
