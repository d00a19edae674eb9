// In crates/strategy/src/engine.rs

use core_types::{PositionState, PriceSeries, Signal};
use tracing::debug;

use crate::sma::rolling_mean;
use crate::types::{AnnotatedPoint, AnnotatedSeries, CrossoverSettings};

/// The SMA crossover strategy engine.
///
/// A pure function over an ordered daily price series: derives the two
/// moving averages, the crossover signals, the long-only position and the
/// per-period returns. Never fails for a well-formed series of any length;
/// insufficient history or NaN gaps degrade to undefined averages, `Hold`
/// signals and zero returns.
///
/// Callers are responsible for validating the window pair first (see
/// [`CrossoverSettings::validate`]); the engine assumes `short < long`.
#[derive(Debug, Default)]
pub struct CrossoverEngine;

impl CrossoverEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotates `series` with the derived strategy columns.
    ///
    /// The input is not mutated; the output has the same length and date
    /// index. Everything is recomputed fresh on each call.
    pub fn annotate(&self, series: &PriceSeries, settings: &CrossoverSettings) -> AnnotatedSeries {
        let closes: Vec<f64> = series.iter().map(|p| p.close).collect();

        let sma_short = rolling_mean(&closes, settings.short_window);
        let sma_long = rolling_mean(&closes, settings.long_window);

        // Crossover scan: a signal needs both averages defined at the
        // current and the previous date. Index 0 has no predecessor.
        let mut signals = vec![Signal::Hold; closes.len()];
        for i in 1..closes.len() {
            signals[i] = match (sma_short[i], sma_long[i], sma_short[i - 1], sma_long[i - 1]) {
                (Some(curr_short), Some(curr_long), Some(prev_short), Some(prev_long)) => {
                    if curr_short > curr_long && prev_short <= prev_long {
                        Signal::Buy
                    } else if curr_short < curr_long && prev_short >= prev_long {
                        Signal::Sell
                    } else {
                        Signal::Hold
                    }
                }
                _ => Signal::Hold,
            };
        }

        // Carry the position forward from the most recent non-Hold signal.
        let mut position = PositionState::Flat;
        let mut positions = Vec::with_capacity(closes.len());
        for signal in &signals {
            match signal {
                Signal::Buy => position = PositionState::Long,
                Signal::Sell => position = PositionState::Flat,
                Signal::Hold => {}
            }
            positions.push(position);
        }

        // The first date's pct_change is defined as 0, not left undefined,
        // so it compounds as a no-op factor.
        let mut points = Vec::with_capacity(closes.len());
        for (i, price) in series.iter().enumerate() {
            let pct_change = if i == 0 {
                0.0
            } else {
                price.close / closes[i - 1] - 1.0
            };
            // One-period lag: the position decided as of the previous close
            // earns the return realized over this period.
            let strategy_return = if i > 0 && positions[i - 1] == PositionState::Long {
                pct_change
            } else {
                0.0
            };
            points.push(AnnotatedPoint {
                date: price.date,
                close: price.close,
                sma_short: sma_short[i],
                sma_long: sma_long[i],
                signal: signals[i],
                position: positions[i],
                pct_change,
                strategy_return,
            });
        }

        let trade_count = signals.iter().filter(|s| **s != Signal::Hold).count();
        debug!(
            rows = points.len(),
            short_window = settings.short_window,
            long_window = settings.long_window,
            signals = trade_count,
            "Annotated price series."
        );

        AnnotatedSeries::new(points)
    }
}
