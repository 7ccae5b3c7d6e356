//! Integration tests for the experiment orchestrator
//!
//! End-to-end over the real generators and sorters, with a seeded RNG so
//! runs are reproducible. Timing values themselves are nondeterministic, so
//! assertions use structural properties and generous tolerances.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortbench_cli::{build_report, run_matrix};
use sortbench_core::{GeneratorKind, SorterKind};

#[test]
fn test_full_cross_product() {
    let mut rng = StdRng::seed_from_u64(11);
    let results = run_matrix(10, 5, &mut rng);

    assert_eq!(
        results.len(),
        SorterKind::ALL.len() * GeneratorKind::ALL.len()
    );

    for result in &results {
        assert_eq!(result.series.len(), 5);
        assert!(result.stats.average.is_finite());
        assert!(result.stats.median.is_finite());
        assert!(result.stats.std_dev >= 0.0);
    }

    // Keys are unique pairs.
    let mut keys: Vec<_> = results.iter().map(|r| (r.sorter, r.generator)).collect();
    keys.sort_by_key(|(s, g)| (s.name(), g.name()));
    keys.dedup();
    assert_eq!(keys.len(), results.len());
}

#[test]
fn test_sorter_major_ordering() {
    let mut rng = StdRng::seed_from_u64(12);
    let results = run_matrix(4, 2, &mut rng);

    // Outer loop over sorters, inner over generators.
    let expected: Vec<_> = SorterKind::ALL
        .iter()
        .flat_map(|s| GeneratorKind::ALL.iter().map(move |g| (*s, *g)))
        .collect();
    let actual: Vec<_> = results.iter().map(|r| (r.sorter, r.generator)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_zero_cardinality_run() {
    let mut rng = StdRng::seed_from_u64(13);
    let results = run_matrix(0, 4, &mut rng);

    assert_eq!(results.len(), 8);
    for result in &results {
        assert_eq!(result.series.len(), 4);
        // Sorting empty arrays: near-zero but still valid timings.
        assert!(result.series.iter().all(|&t| t >= 0.0 && t < 1e-3));
    }
}

#[test]
fn test_report_preserves_order_and_labels() {
    let mut rng = StdRng::seed_from_u64(14);
    let results = run_matrix(6, 3, &mut rng);
    let report = build_report(6, 3, results);

    assert_eq!(report.cardinality, 6);
    assert_eq!(report.iterations, 3);
    assert_eq!(report.entries.len(), 8);
    assert_eq!(report.entries[0].label(), "S=sort, G=fullrand");
    assert_eq!(report.entries[4].label(), "S=sorted, G=fullrand");
    assert_eq!(report.entries[7].label(), "S=sorted, G=revsorted");
}

#[test]
fn test_stats_match_series() {
    let mut rng = StdRng::seed_from_u64(15);
    let results = run_matrix(20, 6, &mut rng);

    for result in &results {
        let expected = sortbench_stats::aggregate(&result.series);
        assert!((result.stats.average - expected.average).abs() < 1e-15);
        assert!((result.stats.median - expected.median).abs() < 1e-15);
        assert!((result.stats.std_dev - expected.std_dev).abs() < 1e-15);
    }
}
