//! Box-Plot Rendering
//!
//! Renders one box-and-whisker glyph per configuration in an interactive
//! gnuplot window. Candlesticks carry the quartile box and Tukey whiskers;
//! gnuplot has no native notch, so the median confidence interval is drawn
//! as an error bar over each box instead.

use crate::report::RunReport;
use gnuplot::{AutoOption, AxesCommon, Figure, LabelOption, PlotOption, Tick};
use sortbench_stats::{box_stats, BoxStats};
use thiserror::Error;

/// Errors raised while rendering the chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The gnuplot backend could not be launched.
    #[error("failed to launch gnuplot: {0}")]
    Backend(String),
}

/// Render the comparative box plot and block until the window is dismissed.
///
/// This is the terminal action of a run: one notched box per configuration,
/// in report order, with x labels rotated for readability.
pub fn render_boxplot(report: &RunReport) -> Result<(), ChartError> {
    let labels: Vec<String> = report.entries.iter().map(|e| e.label()).collect();
    let boxes: Vec<BoxStats> = report
        .entries
        .iter()
        .map(|e| box_stats(&e.series))
        .collect();

    let xs: Vec<f64> = (0..boxes.len()).map(|i| i as f64).collect();
    let ticks = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Tick::Major(i as f64, AutoOption::Fix(label.clone())));

    let mut figure = Figure::new();
    let axes = figure.axes2d();
    axes.set_title("Sort timings by input shape", &[])
        .set_y_label("Trial time (s)", &[])
        .set_x_range(
            AutoOption::Fix(-0.5),
            AutoOption::Fix(boxes.len() as f64 - 0.5),
        )
        .set_x_ticks_custom(ticks, &[], &[LabelOption::Rotate(-10.0)]);

    axes.box_and_whisker(
        xs.iter().copied(),
        boxes.iter().map(|b| b.q1),
        boxes.iter().map(|b| b.whisker_low),
        boxes.iter().map(|b| b.whisker_high),
        boxes.iter().map(|b| b.q3),
        &[
            PlotOption::WhiskerBars(0.5),
            PlotOption::Color("royalblue"),
        ],
    );

    // Median plus notch interval, drawn over each box.
    axes.y_error_bars(
        xs.iter().copied(),
        boxes.iter().map(|b| b.median),
        boxes.iter().map(|b| b.notch),
        &[
            PlotOption::Color("dark-red"),
            PlotOption::PointSymbol('D'),
            PlotOption::PointSize(0.6),
        ],
    );

    figure
        .show()
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    Ok(())
}
