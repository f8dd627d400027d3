// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a steering comparison.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// A required recording is absent. Reported to the user as `File not found.`.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Every sample had a zero reference value, so no percentage exists.
    #[error("No evaluable data: every sample has a zero groundSteering reference")]
    NoEvaluableData,

    #[error("Missing required columns in {}: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data available to chart")]
    NoChartData,

    #[error("Chart rendering failed: {0}")]
    Plot(String),
}

impl ComparisonError {
    /// True for the missing-input case, which the binary reports with the short legacy message.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ComparisonError::FileNotFound { .. })
    }
}
