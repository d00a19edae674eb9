// In crates/analytics/src/types.rs

use serde::Serialize;

/// Aggregate performance of a backtest run, as fractional returns
/// (multiply by 100 for percentages at presentation time).
#[derive(Debug, Clone, Copy, Serialize, Default)]
pub struct PerformanceReport {
    /// Compounded return of holding the underlying over the full period.
    pub buy_and_hold_return: f64,
    /// Compounded return of the crossover strategy over the full period.
    pub strategy_return: f64,
}

impl PerformanceReport {
    /// Creates a new, empty report.
    pub fn new() -> Self {
        Self::default()
    }
}
