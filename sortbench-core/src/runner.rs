//! Benchmark Runner - the Warmup-Then-Measure Trial Loop
//!
//! One trial is generate, start the clock, sort, stop the clock. Generation
//! happens before the start timestamp so only the sort is measured. Warmup
//! trials are identical but discarded, letting caches and the allocator reach
//! steady state before timings count.

use crate::generate::GeneratorKind;
use crate::sort::SorterKind;
use rand::Rng;
use std::time::Instant;

/// Number of discarded warmup trials for a given iteration count.
///
/// Integer division: fewer than 10 iterations means no warmup at all.
pub fn warmup_trials(iterations: usize) -> usize {
    iterations / 10
}

/// Run one (generator, sorter) configuration and return the per-trial elapsed
/// times in seconds, in trial order. `series.len() == iterations`.
///
/// Panics from the generator or sorter propagate: a broken configuration
/// should abort the run rather than skew the statistics.
pub fn run_series<R: Rng>(
    cardinality: usize,
    iterations: usize,
    generator: GeneratorKind,
    sorter: SorterKind,
    rng: &mut R,
) -> Vec<f64> {
    for _ in 0..warmup_trials(iterations) {
        let data = generator.generate(rng, cardinality);
        let _ = std::hint::black_box(sorter.sort(data));
    }

    let mut series = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let data = generator.generate(rng, cardinality);

        let start = Instant::now();
        let _ = std::hint::black_box(sorter.sort(data));
        let elapsed = start.elapsed();

        series.push(elapsed.as_secs_f64());
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_warmup_counts() {
        assert_eq!(warmup_trials(9), 0);
        assert_eq!(warmup_trials(10), 1);
        assert_eq!(warmup_trials(25), 2);
        assert_eq!(warmup_trials(1000), 100);
        assert_eq!(warmup_trials(0), 0);
    }

    #[test]
    fn test_series_length_matches_iterations() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = run_series(50, 12, GeneratorKind::FullRand, SorterKind::InPlace, &mut rng);
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn test_timings_are_sane() {
        let mut rng = StdRng::seed_from_u64(2);
        for generator in GeneratorKind::ALL {
            for sorter in SorterKind::ALL {
                let series = run_series(100, 5, generator, sorter, &mut rng);
                assert!(
                    series.iter().all(|&t| t.is_finite() && t >= 0.0),
                    "S={}, G={} produced a bogus timing",
                    sorter.name(),
                    generator.name()
                );
            }
        }
    }

    #[test]
    fn test_empty_arrays_time_near_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = run_series(0, 8, GeneratorKind::QuasiSorted, SorterKind::Copied, &mut rng);
        assert_eq!(series.len(), 8);
        // Sorting nothing should never take a millisecond.
        assert!(series.iter().all(|&t| t < 1e-3));
    }
}
