// src/plot_functions/plot_steering_comparison.rs

use log::warn;
use std::path::Path;

use crate::comparison::LoadedComparison;
use crate::constants::{
    COLOR_CURRENT_OUTPUT, COLOR_GROUND_STEERING, COLOR_PREVIOUS_OUTPUT, LINE_WIDTH_PLOT,
    MICROS_PER_SECOND, OPACITY_PREVIOUS_OUTPUT,
};
use crate::data_input::steering_data::SteeringSample;
use crate::error::ComparisonError;
use crate::plot_framework::{draw_line_chart, PlotConfig, PlotSeries};

const CHART_TITLE: &str = "groundSteering";
const X_LABEL: &str = "sampleTimestamp (s)";
const Y_LABEL: &str = "groundSteering angle";

/// Maps samples to (seconds since `origin_us`, value) points.
/// Points with a non-finite coordinate (a `nan` or `inf` cell) are dropped.
fn to_points(
    samples: &[SteeringSample],
    origin_us: f64,
    value: impl Fn(&SteeringSample) -> f64,
) -> Vec<(f64, f64)> {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| ((s.sample_time_stamp - origin_us) / MICROS_PER_SECOND, value(s)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if points.len() < samples.len() {
        warn!(
            "Dropped {} non-finite points from the chart",
            samples.len() - points.len()
        );
    }
    points
}

fn series(data: Vec<(f64, f64)>, label: &str, color: plotters::style::RGBColor, opacity: f64) -> PlotSeries {
    PlotSeries {
        data,
        label: label.to_string(),
        color,
        opacity,
        stroke_width: LINE_WIDTH_PLOT,
    }
}

/// Builds the chart series: reference groundSteering first, then the outputs.
///
/// All series share the time origin of the first reference sample.
pub fn steering_series(loaded: &LoadedComparison) -> Vec<PlotSeries> {
    let reference = loaded.reference_samples();
    let origin_us = reference
        .iter()
        .map(|s| s.sample_time_stamp)
        .find(|t| t.is_finite())
        .unwrap_or(0.0);

    let ground_truth = series(
        to_points(reference, origin_us, |s| s.ground_steering),
        "Original groundSteering",
        *COLOR_GROUND_STEERING,
        1.0,
    );

    match loaded {
        LoadedComparison::MultiCommit(run) => vec![
            ground_truth,
            series(
                to_points(&run.current, origin_us, |s| s.output),
                "Current commit output",
                *COLOR_CURRENT_OUTPUT,
                1.0,
            ),
            series(
                to_points(&run.previous, origin_us, |s| s.output),
                "Previous commit output",
                *COLOR_PREVIOUS_OUTPUT,
                OPACITY_PREVIOUS_OUTPUT,
            ),
        ],
        LoadedComparison::SingleFile(samples) => vec![
            ground_truth,
            series(
                to_points(samples, origin_us, |s| s.output),
                "Our output",
                *COLOR_CURRENT_OUTPUT,
                1.0,
            ),
        ],
    }
}

/// Chart layout for a loaded comparison, with ranges fitted to its series.
pub fn comparison_plot_config(
    loaded: &LoadedComparison,
    watermark: Option<&str>,
) -> Result<PlotConfig, ComparisonError> {
    PlotConfig::fitted(
        CHART_TITLE,
        X_LABEL,
        Y_LABEL,
        steering_series(loaded),
        watermark.map(str::to_string),
    )
}

/// Renders the groundSteering vs output comparison chart to `output_file`.
pub fn plot_steering_comparison(
    loaded: &LoadedComparison,
    output_file: &Path,
    watermark: Option<&str>,
) -> Result<(), ComparisonError> {
    let plot_config = comparison_plot_config(loaded, watermark)?;
    draw_line_chart(output_file, &plot_config)
}


// src/plot_functions/plot_steering_comparison.rs
