// In crates/analytics/src/engine.rs

use strategy::AnnotatedSeries;

use crate::types::PerformanceReport;

/// The engine responsible for calculating aggregate performance from an
/// annotated series.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compounds the per-period returns into the two headline figures.
    ///
    /// The product over an empty series is the identity, so an empty input
    /// reports 0% for both. Non-finite per-period returns (provider gaps)
    /// are skipped rather than poisoning the product.
    pub fn calculate(&self, series: &AnnotatedSeries) -> PerformanceReport {
        PerformanceReport {
            buy_and_hold_return: compound(series.iter().map(|p| p.pct_change)),
            strategy_return: compound(series.iter().map(|p| p.strategy_return)),
        }
    }
}

fn compound(returns: impl Iterator<Item = f64>) -> f64 {
    returns
        .filter(|r| r.is_finite())
        .fold(1.0, |acc, r| acc * (1.0 + r))
        - 1.0
}
