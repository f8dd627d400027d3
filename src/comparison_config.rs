// src/comparison_config.rs

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_SINGLE_CHART, MULTI_COMMIT_DELIMITER, SINGLE_FILE_DELIMITER,
};
use crate::data_analysis::accuracy::ToleranceVariant;

/// Which recordings are compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonMode {
    /// `original<run>.csv`, `current<run>.csv` and `previous<run>.csv` from one directory.
    MultiCommit {
        recordings_dir: PathBuf,
        run_id: String,
    },
    /// A single file holding both the reference and the produced output.
    SingleFile { input: PathBuf },
}

impl ComparisonMode {
    pub fn default_delimiter(&self) -> u8 {
        match self {
            ComparisonMode::MultiCommit { .. } => MULTI_COMMIT_DELIMITER,
            ComparisonMode::SingleFile { .. } => SINGLE_FILE_DELIMITER,
        }
    }

    pub fn default_variant(&self) -> ToleranceVariant {
        match self {
            ComparisonMode::MultiCommit { .. } => ToleranceVariant::SignAware,
            ComparisonMode::SingleFile { .. } => ToleranceVariant::Unconditional,
        }
    }

    /// `plot_<run>.png` for a run, a fixed name otherwise.
    pub fn default_chart_path(&self) -> PathBuf {
        match self {
            ComparisonMode::MultiCommit { run_id, .. } => PathBuf::from(format!("plot_{run_id}.png")),
            ComparisonMode::SingleFile { .. } => PathBuf::from(DEFAULT_SINGLE_CHART),
        }
    }
}

/// Everything one comparison run needs. Built once from the command line.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    pub mode: ComparisonMode,
    pub delimiter: u8,
    pub variant: ToleranceVariant,
    /// Where the chart goes; `None` skips rendering.
    pub chart_output: Option<PathBuf>,
    pub watermark: Option<String>,
    pub compute_accuracy: bool,
}

impl ComparisonConfig {
    /// Config with the defaults that belong to `mode`.
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            delimiter: mode.default_delimiter(),
            variant: mode.default_variant(),
            chart_output: Some(mode.default_chart_path()),
            watermark: None,
            compute_accuracy: true,
            mode,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_variant(mut self, variant: ToleranceVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_chart_output(mut self, chart_output: Option<PathBuf>) -> Self {
        self.chart_output = chart_output;
        self
    }

    pub fn with_watermark(mut self, watermark: Option<String>) -> Self {
        self.watermark = watermark;
        self
    }

    pub fn with_accuracy(mut self, compute_accuracy: bool) -> Self {
        self.compute_accuracy = compute_accuracy;
        self
    }
}


// src/comparison_config.rs
