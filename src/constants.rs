// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, RED};
use plotters::style::RGBColor;

// --- Tolerance band ---
// A sample matches when its output lies strictly inside (reference * LOWER, reference * UPPER).
pub const TOLERANCE_LOWER_FACTOR: f64 = 0.75;
pub const TOLERANCE_UPPER_FACTOR: f64 = 1.25;

// Decimal places of the reported percentage.
pub const PERCENTAGE_DECIMALS: i32 = 2;

// --- CSV layout ---
pub const HEADER_SAMPLE_TIME_STAMP: &str = "sampleTimeStamp";
pub const HEADER_GROUND_STEERING: &str = "groundSteering";
pub const HEADER_OUTPUT: &str = "output";

pub const MULTI_COMMIT_DELIMITER: u8 = b';';
pub const SINGLE_FILE_DELIMITER: u8 = b',';

// Recording file prefixes for the multi-commit comparison.
pub const RECORDING_PREFIX_ORIGINAL: &str = "original";
pub const RECORDING_PREFIX_CURRENT: &str = "current";
pub const RECORDING_PREFIX_PREVIOUS: &str = "previous";

pub const DEFAULT_RECORDINGS_DIR: &str = "../recordings";
pub const DEFAULT_SINGLE_INPUT: &str = "src/output.csv";
pub const DEFAULT_SINGLE_CHART: &str = "steering_comparison.png";

// Recorded timestamps are in microseconds.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

// Plot dimensions (13 x 5 aspect).
pub const PLOT_WIDTH: u32 = 1300;
pub const PLOT_HEIGHT: u32 = 500;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_WATERMARK: i32 = 40;

// Maximum number of timestamp tick labels along the x axis.
pub const MAX_X_TICK_LABELS: usize = 40;

// --- Plot Color Assignments ---
pub const COLOR_GROUND_STEERING: &RGBColor = &RED;
pub const COLOR_CURRENT_OUTPUT: &RGBColor = &BLUE;
pub const COLOR_PREVIOUS_OUTPUT: &RGBColor = &GREEN;
pub const COLOR_WATERMARK: &RGBColor = &GREEN;

pub const OPACITY_PREVIOUS_OUTPUT: f64 = 0.5;
pub const OPACITY_WATERMARK: f64 = 0.5;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
