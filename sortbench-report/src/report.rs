//! Report Data Structures

use sortbench_stats::Aggregate;

/// Complete results of one benchmarking run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Array size used for every configuration.
    pub cardinality: usize,
    /// Timed trials per configuration.
    pub iterations: usize,
    /// Per-configuration results, in execution (and display) order.
    pub entries: Vec<ConfigResult>,
}

/// Result for a single (sorter, generator) configuration.
#[derive(Debug, Clone)]
pub struct ConfigResult {
    /// Sorter name (`sort`, `sorted`).
    pub sorter: String,
    /// Generator name (`fullrand`, `quasi_sorted`, `tomerge`, `revsorted`).
    pub generator: String,
    /// Raw per-trial timings in seconds, in trial order.
    pub series: Vec<f64>,
    /// Summary statistics over `series`.
    pub stats: Aggregate,
}

impl ConfigResult {
    /// Display label for this configuration.
    pub fn label(&self) -> String {
        format!("S={}, G={}", self.sorter, self.generator)
    }
}
