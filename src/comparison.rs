// src/comparison.rs

use log::info;

use crate::comparison_config::{ComparisonConfig, ComparisonMode};
use crate::data_analysis::accuracy::{compare_values, ComparisonResult, ToleranceVariant};
use crate::data_input::run_recordings::RunRecordings;
use crate::data_input::steering_data::SteeringSample;
use crate::data_input::steering_parser::parse_steering_file;
use crate::error::ComparisonError;
use crate::plot_functions::plot_steering_comparison::plot_steering_comparison;

/// Datasets loaded for one comparison run.
#[derive(Debug, Clone)]
pub enum LoadedComparison {
    MultiCommit(RunRecordings),
    SingleFile(Vec<SteeringSample>),
}

impl LoadedComparison {
    /// Reads every file `config.mode` needs. Fails before any computation if one is missing.
    pub fn load(config: &ComparisonConfig) -> Result<Self, ComparisonError> {
        match &config.mode {
            ComparisonMode::MultiCommit {
                recordings_dir,
                run_id,
            } => Ok(LoadedComparison::MultiCommit(RunRecordings::load(
                recordings_dir,
                run_id,
                config.delimiter,
            )?)),
            ComparisonMode::SingleFile { input } => Ok(LoadedComparison::SingleFile(
                parse_steering_file(input, config.delimiter)?,
            )),
        }
    }

    /// Samples the accuracy comparator runs on: the current commit, or the single file.
    pub fn evaluated_samples(&self) -> &[SteeringSample] {
        match self {
            LoadedComparison::MultiCommit(run) => &run.current,
            LoadedComparison::SingleFile(samples) => samples,
        }
    }

    /// Samples whose `groundSteering` is charted as ground truth.
    pub fn reference_samples(&self) -> &[SteeringSample] {
        match self {
            LoadedComparison::MultiCommit(run) => &run.original,
            LoadedComparison::SingleFile(samples) => samples,
        }
    }

    pub fn evaluate(&self, variant: ToleranceVariant) -> Result<ComparisonResult, ComparisonError> {
        compare_values(self.evaluated_samples(), variant)
    }
}

/// Runs the accuracy step of `config`, if enabled.
pub fn run_accuracy(
    loaded: &LoadedComparison,
    config: &ComparisonConfig,
) -> Result<Option<ComparisonResult>, ComparisonError> {
    if !config.compute_accuracy {
        info!("Accuracy computation disabled");
        return Ok(None);
    }
    info!(
        "Comparing {} samples ({} tolerance)",
        loaded.evaluated_samples().len(),
        config.variant
    );
    loaded.evaluate(config.variant).map(Some)
}

/// Renders the chart of `config`, if enabled.
pub fn run_chart(
    loaded: &LoadedComparison,
    config: &ComparisonConfig,
) -> Result<(), ComparisonError> {
    match &config.chart_output {
        Some(path) => plot_steering_comparison(loaded, path, config.watermark.as_deref()),
        None => {
            info!("Chart rendering disabled");
            Ok(())
        }
    }
}

/// Results of the accuracy and chart steps of one run. A failure in one step does not stop the other.
#[derive(Debug)]
pub struct ComparisonOutcome {
    pub accuracy: Result<Option<ComparisonResult>, ComparisonError>,
    pub chart: Result<(), ComparisonError>,
}

impl ComparisonOutcome {
    pub fn is_success(&self) -> bool {
        self.accuracy.is_ok() && self.chart.is_ok()
    }
}

/// Runs both steps of `config` against already loaded data.
pub fn run_comparison(loaded: &LoadedComparison, config: &ComparisonConfig) -> ComparisonOutcome {
    let accuracy = run_accuracy(loaded, config);
    let chart = run_chart(loaded, config);
    ComparisonOutcome { accuracy, chart }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_single_file_evaluates_own_rows() {
        let loaded = LoadedComparison::SingleFile(vec![
            SteeringSample::new(1.0, 0.2, 0.2),
            SteeringSample::new(2.0, 0.2, 0.9),
        ]);
        let result = loaded.evaluate(ToleranceVariant::Unconditional).unwrap();
        assert_eq!(result.data_points_evaluated, 2);
        assert_eq!(result.valid_count, 1);
    }

    #[test]
    fn test_multi_commit_evaluates_current_only() {
        let bad = vec![SteeringSample::new(1.0, 0.2, -5.0)];
        let good = vec![SteeringSample::new(1.0, 0.2, 0.21)];
        let loaded = LoadedComparison::MultiCommit(RunRecordings {
            original: bad.clone(),
            current: good,
            previous: bad,
        });
        let result = loaded.evaluate(ToleranceVariant::SignAware).unwrap();
        assert_eq!(result.percentage(), 100.0);
        assert_eq!(loaded.reference_samples()[0].output, -5.0);
    }

    #[test]
    fn test_accuracy_can_be_disabled() {
        let config = ComparisonConfig::new(ComparisonMode::SingleFile {
            input: PathBuf::from("unused.csv"),
        })
        .with_accuracy(false);
        let loaded = LoadedComparison::SingleFile(Vec::new());
        assert_eq!(run_accuracy(&loaded, &config).unwrap(), None);
    }

    #[test]
    fn test_chart_step_runs_after_accuracy_failure() {
        let dir = tempfile::tempdir().unwrap();
        let chart = dir.path().join("zero.png");
        let config = ComparisonConfig::new(ComparisonMode::SingleFile {
            input: PathBuf::from("unused.csv"),
        })
        .with_chart_output(Some(chart.clone()));
        let loaded = LoadedComparison::SingleFile(vec![
            SteeringSample::new(0.0, 0.0, 0.1),
            SteeringSample::new(50_000.0, 0.0, -0.1),
        ]);

        let outcome = run_comparison(&loaded, &config);
        assert!(matches!(outcome.accuracy, Err(ComparisonError::NoEvaluableData)));
        assert!(outcome.chart.is_ok(), "{:?}", outcome.chart);
        assert!(!outcome.is_success());
        assert!(fs::metadata(&chart).unwrap().len() > 0);
    }

    #[test]
    fn test_load_single_file_with_custom_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("output.csv");
        fs::write(&input, "sampleTimeStamp|groundSteering|output\n1|0.1|0.1\n").unwrap();
        let config = ComparisonConfig::new(ComparisonMode::SingleFile { input }).with_delimiter(b'|');
        let loaded = LoadedComparison::load(&config).unwrap();
        assert_eq!(loaded.evaluated_samples().len(), 1);
    }
}

// src/comparison.rs
