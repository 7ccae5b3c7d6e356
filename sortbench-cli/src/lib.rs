#![warn(missing_docs)]
//! Sortbench CLI
//!
//! Argument parsing and the top-level run: parse the two positionals, print
//! the status line, execute the sorter x generator matrix sequentially, show
//! the terminal summary, then block on the interactive box-plot window.

mod executor;

pub use executor::{build_report, run_matrix, PairResult};

use clap::Parser;
use sortbench_report::{format_human_output, render_boxplot};

/// Sortbench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "Sortbench - wall-clock comparison of sort routines")]
pub struct Cli {
    /// Cardinality of each generated array
    #[arg(default_value_t = 2000)]
    pub cardinal: usize,

    /// Number of timed trials per configuration
    #[arg(default_value_t = 1000)]
    pub iterations: usize,
}

/// Run the sortbench CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the sortbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("sortbench=info")
        .init();

    println!(
        "Running with card={}, iterations={}",
        cli.cardinal, cli.iterations
    );
    tracing::debug!(
        cardinal = cli.cardinal,
        iterations = cli.iterations,
        "starting benchmark matrix"
    );

    let mut rng = rand::thread_rng();
    let results = run_matrix(cli.cardinal, cli.iterations, &mut rng);
    let report = build_report(cli.cardinal, cli.iterations, results);

    print!("{}", format_human_output(&report));

    // Terminal action: blocks until the chart window is dismissed.
    render_boxplot(&report)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sortbench"]).unwrap();
        assert_eq!(cli.cardinal, 2000);
        assert_eq!(cli.iterations, 1000);
    }

    #[test]
    fn test_positional_overrides() {
        let cli = Cli::try_parse_from(["sortbench", "500"]).unwrap();
        assert_eq!(cli.cardinal, 500);
        assert_eq!(cli.iterations, 1000);

        let cli = Cli::try_parse_from(["sortbench", "500", "20"]).unwrap();
        assert_eq!(cli.cardinal, 500);
        assert_eq!(cli.iterations, 20);
    }

    #[test]
    fn test_non_integer_is_usage_error() {
        assert!(Cli::try_parse_from(["sortbench", "abc"]).is_err());
        assert!(Cli::try_parse_from(["sortbench", "10", "x"]).is_err());
    }

    #[test]
    fn test_excess_arguments_rejected() {
        assert!(Cli::try_parse_from(["sortbench", "1", "2", "3"]).is_err());
    }
}
