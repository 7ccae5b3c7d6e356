//! Output Formatting
//!
//! Terminal-friendly summary of a run: one block per configuration with its
//! average, median, and standard deviation, scaled to a readable unit.

use crate::report::RunReport;

/// Format a number of seconds with an appropriate unit (ns/µs/ms/s).
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "n/a".to_string();
    }
    let nanos = seconds * 1e9;
    if nanos < 1_000.0 {
        format!("{:.1} ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", seconds)
    }
}

/// Format a run report for human-readable terminal display.
pub fn format_human_output(report: &RunReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Sortbench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");
    output.push_str(&format!(
        "cardinality: {}  iterations: {}\n\n",
        report.cardinality, report.iterations
    ));

    let max_label_len = report
        .entries
        .iter()
        .map(|e| e.label().len())
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        output.push_str(&format!(
            "  {:<width$}  avg: {:>10}  med: {:>10}  std: {:>10}\n",
            entry.label(),
            format_seconds(entry.stats.average),
            format_seconds(entry.stats.median),
            format_seconds(entry.stats.std_dev),
            width = max_label_len
        ));
    }

    output.push('\n');
    output
}
