#![warn(missing_docs)]
//! Sortbench Report - Reporting and Visualization
//!
//! Consumes the per-configuration results of a run and produces:
//! - A human-readable terminal summary
//! - A comparative box-and-whisker chart in an interactive gnuplot window

mod chart;
mod human;
mod report;

pub use chart::{render_boxplot, ChartError};
pub use human::{format_human_output, format_seconds};
pub use report::{ConfigResult, RunReport};
