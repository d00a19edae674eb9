// In crates/core-types/src/types.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single daily OHLCV record for one trading date.
///
/// Only `date` and `close` are consumed by the strategy core; the remaining
/// fields are carried through from the data provider. A provider gap is
/// represented as a NaN close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    /// Builds a bar where every price field is the close. Useful for
    /// constructing series from bare close prices.
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }
}

/// An ordered daily price history: unique dates, strictly ascending.
///
/// The ordering invariant is enforced at construction so that downstream
/// consumers never have to re-check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series from pre-sorted points, verifying that dates are
    /// strictly ascending.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(Error::UnorderedSeries { date: pair[1].date });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary check before running the strategy: an empty range must be
    /// short-circuited by the caller, never handed to the engine.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(Error::EmptySeries);
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }
}

/// A discrete trading signal emitted at the date where a crossover occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

/// The long-only holding state carried forward from the most recent signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionState {
    Long,
    #[default]
    Flat,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn from_points_accepts_ascending_dates() {
        let points = vec![
            PricePoint::from_close(date(2), 10.0),
            PricePoint::from_close(date(3), 11.0),
            PricePoint::from_close(date(5), 12.0),
        ];
        let series = PriceSeries::from_points(points).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn from_points_rejects_duplicate_dates() {
        let points = vec![
            PricePoint::from_close(date(2), 10.0),
            PricePoint::from_close(date(2), 11.0),
        ];
        let err = PriceSeries::from_points(points).unwrap_err();
        assert!(matches!(err, Error::UnorderedSeries { .. }));
    }

    #[test]
    fn from_points_rejects_descending_dates() {
        let points = vec![
            PricePoint::from_close(date(5), 10.0),
            PricePoint::from_close(date(2), 11.0),
        ];
        assert!(PriceSeries::from_points(points).is_err());
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::from_points(Vec::new()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn ensure_non_empty_flags_an_empty_series() {
        let empty = PriceSeries::default();
        assert!(matches!(empty.ensure_non_empty(), Err(Error::EmptySeries)));

        let series =
            PriceSeries::from_points(vec![PricePoint::from_close(date(2), 10.0)]).unwrap();
        assert!(series.ensure_non_empty().is_ok());
    }
}
