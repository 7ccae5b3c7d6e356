#![warn(missing_docs)]
//! Sortbench Statistical Engine
//!
//! Aggregation for timing series:
//! - Average, median, and population standard deviation per series
//! - Percentile calculation with linear interpolation
//! - Box-plot statistics (quartiles, Tukey whiskers, notch interval)

mod boxes;
mod summary;

pub use boxes::{box_stats, BoxStats};
pub use summary::{aggregate, percentile, Aggregate};
