//! Experiment Orchestrator
//!
//! Enumerates the full cross product of sorters x generators and runs each
//! configuration through the trial loop and the aggregator. Execution is
//! strictly sequential: concurrent trials would compete for CPU and cache
//! and skew every timing in the run.

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use sortbench_core::{run_series, GeneratorKind, SorterKind};
use sortbench_report::{ConfigResult, RunReport};
use sortbench_stats::{aggregate, Aggregate};

/// Result of one (sorter, generator) configuration.
#[derive(Debug, Clone)]
pub struct PairResult {
    /// Sorter that was timed.
    pub sorter: SorterKind,
    /// Generator that fed it.
    pub generator: GeneratorKind,
    /// Raw per-trial timings in seconds.
    pub series: Vec<f64>,
    /// Summary statistics over the series.
    pub stats: Aggregate,
}

/// Run every sorter against every generator, sorter-major, and collect the
/// results in execution order. The (sorter, generator) pair is unique per
/// entry and the ordering is what the reporter will display.
pub fn run_matrix<R: Rng>(
    cardinality: usize,
    iterations: usize,
    rng: &mut R,
) -> Vec<PairResult> {
    let total = SorterKind::ALL.len() * GeneratorKind::ALL.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(total);
    for sorter in SorterKind::ALL {
        for generator in GeneratorKind::ALL {
            pb.set_message(format!("S={}, G={}", sorter.name(), generator.name()));
            tracing::debug!(
                sorter = sorter.name(),
                generator = generator.name(),
                "running configuration"
            );

            let series = run_series(cardinality, iterations, generator, sorter, rng);
            let stats = aggregate(&series);
            results.push(PairResult {
                sorter,
                generator,
                series,
                stats,
            });
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    results
}

/// Fold executor output into the report model consumed by the reporter.
pub fn build_report(
    cardinality: usize,
    iterations: usize,
    results: Vec<PairResult>,
) -> RunReport {
    RunReport {
        cardinality,
        iterations,
        entries: results
            .into_iter()
            .map(|r| ConfigResult {
                sorter: r.sorter.name().to_string(),
                generator: r.generator.name().to_string(),
                series: r.series,
                stats: r.stats,
            })
            .collect(),
    }
}
