// Integration tests for the crossover engine: end-to-end properties that
// span annotation and re-annotation.

use chrono::{Days, NaiveDate};
use core_types::{PricePoint, PriceSeries};
use strategy::{CrossoverEngine, CrossoverSettings};

fn series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::from_close(start + Days::new(i as u64), close))
        .collect();
    PriceSeries::from_points(points).unwrap()
}

#[test]
fn re_annotating_the_output_base_columns_reproduces_the_derived_columns() {
    let closes = [10.0, 10.0, 10.0, 10.0, 10.0, 12.0, 14.0, 16.0, 5.0, 5.0, 5.0, 5.0];
    let settings = CrossoverSettings {
        short_window: 2,
        long_window: 3,
    };
    let engine = CrossoverEngine::new();

    let first = engine.annotate(&series(&closes), &settings);

    // Rebuild a raw series from the annotated output's base columns only.
    let rebuilt_points = first
        .iter()
        .map(|p| PricePoint::from_close(p.date, p.close))
        .collect();
    let rebuilt = PriceSeries::from_points(rebuilt_points).unwrap();

    let second = engine.annotate(&rebuilt, &settings);
    assert_eq!(first, second);
}

#[test]
fn annotation_preserves_the_input_date_index() {
    let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
    let settings = CrossoverSettings {
        short_window: 2,
        long_window: 3,
    };
    let input = series(&closes);
    let annotated = CrossoverEngine::new().annotate(&input, &settings);

    assert_eq!(annotated.len(), input.len());
    for (raw, point) in input.iter().zip(annotated.iter()) {
        assert_eq!(point.date, raw.date);
        assert_eq!(point.close, raw.close);
    }
}

#[test]
fn a_quiet_series_produces_no_signals_and_no_strategy_return() {
    let closes = [50.0; 20];
    let settings = CrossoverSettings {
        short_window: 3,
        long_window: 7,
    };
    let annotated = CrossoverEngine::new().annotate(&series(&closes), &settings);

    for point in annotated.iter() {
        assert_eq!(point.signal, core_types::Signal::Hold);
        assert_eq!(point.position, core_types::PositionState::Flat);
        assert_eq!(point.strategy_return, 0.0);
    }
}

#[test]
fn a_single_point_series_is_annotated_without_error() {
    let settings = CrossoverSettings {
        short_window: 2,
        long_window: 3,
    };
    let annotated = CrossoverEngine::new().annotate(&series(&[42.0]), &settings);

    assert_eq!(annotated.len(), 1);
    let point = &annotated.points()[0];
    assert_eq!(point.pct_change, 0.0);
    assert_eq!(point.strategy_return, 0.0);
    assert_eq!(point.signal, core_types::Signal::Hold);
}
