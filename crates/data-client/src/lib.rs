// In crates/data-client/src/lib.rs

use app_config::types::DataSettings;
use chrono::{DateTime, Days, NaiveDate};
use core_types::{PricePoint, PriceSeries};
use tracing::debug;

pub mod error;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use types::*;

impl DataClient {
    /// Constructs a new DataClient from DataSettings.
    pub fn new(settings: &DataSettings) -> Self {
        DataClient {
            http_client: reqwest::Client::new(),
            base_url: settings.base_url.clone(),
        }
    }

    /// Fetches daily OHLCV history for `symbol` over the inclusive date
    /// range `[start, end]`.
    ///
    /// Corresponds to `GET /v8/finance/chart/{symbol}?interval=1d`. The
    /// returned series is guaranteed ascending with at most one record per
    /// date; a range with no data yields an empty series (the caller is
    /// expected to short-circuit before running the strategy on it).
    pub async fn get_daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        // period2 is exclusive on the provider side, so push it one day
        // past the inclusive end of the requested range.
        let period1 = start.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc().timestamp();
        let period2 = (end + Days::new(1))
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc()
            .timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, period1, period2
        );
        debug!(symbol, %start, %end, "Requesting daily history.");

        let response_body = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let chart: ChartResponse =
            serde_json::from_str(&response_body).map_err(Error::DeserializationFailed)?;

        if let Some(err) = chart.chart.error {
            return Err(Error::ApiError {
                code: err.code,
                description: err.description,
            });
        }

        let result = chart
            .chart
            .result
            .and_then(|mut results| if results.is_empty() { None } else { Some(results.remove(0)) })
            .ok_or_else(|| Error::MalformedPayload {
                symbol: symbol.to_string(),
            })?;

        Ok(to_price_series(&result)?)
    }
}

/// Converts the provider's parallel arrays into a clean, ascending,
/// deduplicated `PriceSeries`. Missing values become NaN.
fn to_price_series(result: &ChartResult) -> core_types::Result<PriceSeries> {
    let empty = Quote::default();
    let quote = result.indicators.quote.first().unwrap_or(&empty);

    let mut points: Vec<PricePoint> = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(date) = DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()) else {
            continue;
        };
        points.push(PricePoint {
            date,
            open: value_at(&quote.open, i),
            high: value_at(&quote.high, i),
            low: value_at(&quote.low, i),
            close: value_at(&quote.close, i),
            volume: value_at(&quote.volume, i),
        });
    }

    // The provider can emit an intraday timestamp for the current session
    // alongside the daily bars. Keep the first record per date.
    points.sort_by_key(|p| p.date);
    points.dedup_by_key(|p| p.date);

    PriceSeries::from_points(points)
}

fn value_at(values: &[Option<f64>], i: usize) -> f64 {
    values.get(i).copied().flatten().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChartResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn converts_a_chart_payload_into_an_ascending_series() {
        // 2024-01-02 and 2024-01-03, with a null close on the second day.
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, 101.0],
                            "high": [102.0, 103.0],
                            "low": [99.0, 100.0],
                            "close": [101.5, null],
                            "volume": [1000.0, 1100.0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let chart = parse(body);
        let results = chart.chart.result.unwrap();
        let series = to_price_series(&results[0]).unwrap();

        assert_eq!(series.len(), 2);
        let points = series.points();
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(points[0].close, 101.5);
        assert!(points[1].close.is_nan());
    }

    #[test]
    fn duplicate_dates_keep_the_first_record() {
        // Two timestamps on the same UTC date (a daily bar plus an intraday
        // snapshot of the current session).
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704196800],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, 100.0],
                            "high": [102.0, 102.5],
                            "low": [99.0, 99.0],
                            "close": [101.5, 102.2],
                            "volume": [1000.0, 1500.0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let chart = parse(body);
        let results = chart.chart.result.unwrap();
        let series = to_price_series(&results[0]).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].close, 101.5);
    }

    #[test]
    fn provider_error_payload_deserializes() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;

        let chart = parse(body);
        let err = chart.chart.error.unwrap();
        assert_eq!(err.code, "Not Found");
    }

    #[test]
    fn empty_timestamps_yield_an_empty_series() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [],
                    "indicators": {"quote": [{}]}
                }],
                "error": null
            }
        }"#;

        let chart = parse(body);
        let results = chart.chart.result.unwrap();
        let series = to_price_series(&results[0]).unwrap();
        assert!(series.is_empty());
    }
}
