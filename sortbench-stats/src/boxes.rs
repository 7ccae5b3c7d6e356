//! Box-Plot Statistics
//!
//! Per-series numbers backing one box in the comparison chart: quartiles,
//! Tukey whiskers (most extreme samples within 1.5 x IQR of the box), and the
//! notch interval around the median.

use crate::summary::percentile;

/// Statistics backing a single box-and-whisker glyph.
#[derive(Debug, Clone, Copy)]
pub struct BoxStats {
    /// First quartile (box bottom).
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile (box top).
    pub q3: f64,
    /// Lowest sample within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Highest sample within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    /// Half-width of the notch interval, `1.57 * IQR / sqrt(n)`.
    ///
    /// A rough 95% confidence band around the median; boxes whose notch
    /// intervals do not overlap have visibly different medians.
    pub notch: f64,
}

/// Compute box-plot statistics for a series.
///
/// Empty series yield `NaN` fields, matching [`crate::aggregate`].
pub fn box_stats(series: &[f64]) -> BoxStats {
    if series.is_empty() {
        return BoxStats {
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            whisker_low: f64::NAN,
            whisker_high: f64::NAN,
            notch: f64::NAN,
        };
    }

    let q1 = percentile(series, 25.0);
    let median = percentile(series, 50.0);
    let q3 = percentile(series, 75.0);
    let iqr = q3 - q1;

    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let whisker_low = series
        .iter()
        .copied()
        .filter(|&x| x >= low_fence)
        .fold(f64::INFINITY, f64::min);
    let whisker_high = series
        .iter()
        .copied()
        .filter(|&x| x <= high_fence)
        .fold(f64::NEG_INFINITY, f64::max);

    BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        notch: 1.57 * iqr / (series.len() as f64).sqrt(),
    }
}
