// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::errors::MinMaxError;
use ndarray_stats::QuantileExt; // .min() and .max() on Array1

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_WATERMARK, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_WATERMARK, LINE_WIDTH_LEGEND, MAX_X_TICK_LABELS, OPACITY_WATERMARK, PLOT_HEIGHT,
    PLOT_WIDTH,
};
use crate::error::ComparisonError;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
    pub stroke_width: u32,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub watermark: Option<String>,
}

impl PlotConfig {
    /// Builds a config whose ranges cover every point of `series`.
    /// The y range gets the usual padding; the x range is only padded when it collapses to a point.
    pub fn fitted(
        title: &str,
        x_label: &str,
        y_label: &str,
        series: Vec<PlotSeries>,
        watermark: Option<String>,
    ) -> Result<Self, ComparisonError> {
        let xs: Array1<f64> = series
            .iter()
            .flat_map(|s| s.data.iter().map(|&(x, _)| x))
            .collect();
        let ys: Array1<f64> = series
            .iter()
            .flat_map(|s| s.data.iter().map(|&(_, y)| y))
            .collect();

        let extent = |values: &Array1<f64>| -> Result<(f64, f64), ComparisonError> {
            let to_error = |e: MinMaxError| match e {
                MinMaxError::EmptyInput => ComparisonError::NoChartData,
                MinMaxError::UndefinedOrder => {
                    ComparisonError::Plot("chart data contains non-finite values".to_string())
                }
            };
            let min = values.min().map_err(to_error)?;
            let max = values.max().map_err(to_error)?;
            Ok((*min, *max))
        };
        let (x_min, x_max) = extent(&xs)?;
        let (y_min, y_max) = extent(&ys)?;

        let (x_start, x_end) = if x_max > x_min {
            (x_min, x_max)
        } else {
            calculate_range(x_min, x_max)
        };
        let (y_start, y_end) = calculate_range(y_min, y_max);

        Ok(Self {
            title: title.to_string(),
            x_range: x_start..x_end,
            y_range: y_start..y_end,
            series,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            watermark,
        })
    }
}

/// Draws the watermark text centered in `area`, behind whatever is drawn next.
fn draw_watermark(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let center = (
        (x_range.end - x_range.start) / 2,
        (y_range.end - y_range.start) / 2,
    );
    let style = ("sans-serif", FONT_SIZE_WATERMARK)
        .into_font()
        .color(&COLOR_WATERMARK.mix(OPACITY_WATERMARK))
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(text.to_string(), center, style))?;
    Ok(())
}

fn draw_line_chart_on(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if let Some(text) = &plot_config.watermark {
        draw_watermark(area, text)?;
    }

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(MAX_X_TICK_LABELS)
        .y_labels(10)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let style = s.color.mix(s.opacity).stroke_width(s.stroke_width);
        let series = chart.draw_series(LineSeries::new(s.data.iter().cloned(), style))?;

        if !s.label.is_empty() {
            let legend_style = s.color.mix(s.opacity).stroke_width(LINE_WIDTH_LEGEND);
            series
                .label(&s.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], legend_style));
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }
    Ok(())
}

/// Renders a single line chart to a PNG at `output_filename`.
pub fn draw_line_chart(output_filename: &Path, plot_config: &PlotConfig) -> Result<(), ComparisonError> {
    if plot_config.series.iter().all(|s| s.data.is_empty()) {
        return Err(ComparisonError::NoChartData);
    }

    let render = || -> Result<(), Box<dyn Error>> {
        let root_area =
            BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root_area.fill(&WHITE)?;
        draw_line_chart_on(&root_area, plot_config)?;
        root_area.present()?;
        Ok(())
    };
    render().map_err(|e| ComparisonError::Plot(e.to_string()))?;

    log::info!("Chart saved as '{}'.", output_filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::RED;

    fn series(data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: "s".to_string(),
            color: RED,
            opacity: 1.0,
            stroke_width: 1,
        }
    }

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min + 1.5).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_flat_and_reversed() {
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }

    #[test]
    fn test_fitted_covers_all_series() {
        let config = PlotConfig::fitted(
            "t",
            "x",
            "y",
            vec![
                series(vec![(0.0, -1.0), (1.0, 0.0)]),
                series(vec![(2.0, 1.0)]),
            ],
            None,
        )
        .unwrap();
        assert_eq!(config.x_range, 0.0..2.0);
        assert!((config.y_range.start + 1.3).abs() < 1e-12);
        assert!((config.y_range.end - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_fitted_single_point_gets_x_padding() {
        let config =
            PlotConfig::fitted("t", "x", "y", vec![series(vec![(3.0, 0.1)])], None).unwrap();
        assert_eq!(config.x_range, 2.5..3.5);
    }

    #[test]
    fn test_fitted_with_nan_is_a_plot_error() {
        let err = PlotConfig::fitted(
            "t",
            "x",
            "y",
            vec![series(vec![(0.0, 1.0), (1.0, f64::NAN)])],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ComparisonError::Plot(_)));
    }

    #[test]
    fn test_fitted_without_points_fails() {
        let err = PlotConfig::fitted("t", "x", "y", vec![series(vec![])], None).unwrap_err();
        assert!(matches!(err, ComparisonError::NoChartData));
    }
}

// src/plot_framework.rs
