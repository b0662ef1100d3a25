/// Arithmetic mean, skipping non-finite entries. `None` when nothing
/// survives the filter.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.iter().copied().filter(|v| v.is_finite()) {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean over a field where a missing value still counts, as zero. Used for
/// live fields: a golfer who has not teed off sits at even par through zero
/// holes. `None` only when the set itself is empty.
#[must_use]
pub fn mean_or_even(values: &[Option<f64>]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        let sum: f64 = values.iter().map(|v| v.unwrap_or(0.0)).sum();
        Some(sum / values.len() as f64)
    }
}

/// Mean raw strokes expressed relative to par.
#[must_use]
pub fn mean_over_par(strokes: &[f64], par: i32) -> Option<f64> {
    mean(strokes).map(|m| m - f64::from(par))
}

/// Round to 1 decimal: the precision of every persisted score field.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimals: earnings only.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
