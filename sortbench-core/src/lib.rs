#![warn(missing_docs)]
//! Sortbench Core - Generators, Sorters, and the Trial Loop
//!
//! This crate provides the measurement substrate for the harness:
//! - `GeneratorKind` for producing synthetic arrays with a known shape
//! - `SorterKind` for the sort routines under test
//! - `run_series` for the warmup-then-measure trial loop

mod generate;
mod runner;
mod sort;

pub use generate::{GeneratorKind, MAX_VALUE};
pub use runner::{run_series, warmup_trials};
pub use sort::SorterKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_dimensions() {
        assert_eq!(SorterKind::ALL.len(), 2);
        assert_eq!(GeneratorKind::ALL.len(), 4);
    }
}
