// In crates/strategy/src/types.rs

use chrono::NaiveDate;
use core_types::{Error, PositionState, Result, Signal};
use serde::{Deserialize, Serialize};

/// Configuration for the SMA crossover strategy.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrossoverSettings {
    /// Window length for the short (fast) moving average.
    pub short_window: usize,
    /// Window length for the long (slow) moving average.
    pub long_window: usize,
}

impl CrossoverSettings {
    /// Checks the window ordering precondition.
    ///
    /// The engine itself assumes the short average reacts faster than the
    /// long one; callers must reject a misordered pair before running it.
    pub fn validate(&self) -> Result<()> {
        if self.short_window == 0 || self.short_window >= self.long_window {
            return Err(Error::InvalidWindows {
                short: self.short_window,
                long: self.long_window,
            });
        }
        Ok(())
    }
}

/// One date of the annotated output series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnotatedPoint {
    pub date: NaiveDate,
    pub close: f64,
    /// Trailing mean over `short_window` closes; `None` until enough history.
    pub sma_short: Option<f64>,
    /// Trailing mean over `long_window` closes; `None` until enough history.
    pub sma_long: Option<f64>,
    /// Set only at the date where a crossover occurs, `Hold` elsewhere.
    pub signal: Signal,
    /// Step function carried forward from the most recent non-`Hold` signal.
    pub position: PositionState,
    /// Simple return of `close` vs. the previous date's close; 0 at index 0.
    pub pct_change: f64,
    /// `position[i-1] * pct_change[i]`; 0 at index 0.
    pub strategy_return: f64,
}

/// The engine's output: same length and date index as the input series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotatedSeries {
    points: Vec<AnnotatedPoint>,
}

impl AnnotatedSeries {
    pub(crate) fn new(points: Vec<AnnotatedPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[AnnotatedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedPoint> {
        self.points.iter()
    }
}
