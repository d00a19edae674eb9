// In crates/strategy/src/sma.rs

/// Trailing simple moving average over `window` values.
///
/// Output has the same length as `values`. An entry is `None` until a full
/// window of history exists (the first `window - 1` entries), and `None`
/// whenever the window covers a NaN value. Maintains an incremental windowed
/// sum rather than recomputing the mean per index.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window >= 1, "window must be at least 1");

    let mut out = vec![None; values.len()];
    let mut sum = 0.0;
    // NaN values are excluded from the running sum and counted separately,
    // so a gap leaving the window restores exact arithmetic.
    let mut nan_in_window = 0usize;

    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() {
            nan_in_window += 1;
        } else {
            sum += value;
        }

        if i >= window {
            let leaving = values[i - window];
            if leaving.is_nan() {
                nan_in_window -= 1;
            } else {
                sum -= leaving;
            }
        }

        if i + 1 >= window && nan_in_window == 0 {
            out[i] = Some(sum / window as f64);
        }
    }

    out
}
