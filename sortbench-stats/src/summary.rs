//! Series Aggregation
//!
//! Population statistics over a full timing series. Nothing here trims
//! outliers: every trial is part of the distribution being reported.

/// Summary statistics for one timing series.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate {
    /// Arithmetic mean of the series, in seconds.
    pub average: f64,
    /// Median (linear interpolation for even lengths), in seconds.
    pub median: f64,
    /// Population standard deviation (not sample-corrected), in seconds.
    pub std_dev: f64,
}

/// Compute summary statistics over a series.
///
/// A length-1 series yields `average == median == series[0]` with zero
/// standard deviation. An empty series yields `NaN` in every field; that is
/// the documented behavior, callers are expected to run at least one trial.
pub fn aggregate(series: &[f64]) -> Aggregate {
    if series.is_empty() {
        return Aggregate {
            average: f64::NAN,
            median: f64::NAN,
            std_dev: f64::NAN,
        };
    }

    let n = series.len() as f64;
    let average = series.iter().sum::<f64>() / n;

    let variance = series.iter().map(|x| (x - average).powi(2)).sum::<f64>() / n;

    Aggregate {
        average,
        median: percentile(series, 50.0),
        std_dev: variance.sqrt(),
    }
}

/// Compute a single percentile from a series.
///
/// Uses linear interpolation between nearest ranks. Returns `NaN` for an
/// empty series.
pub fn percentile(series: &[f64], p: f64) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }

    if series.len() == 1 {
        return series[0];
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let rank = (p / 100.0) * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}
