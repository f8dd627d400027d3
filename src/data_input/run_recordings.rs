// src/data_input/run_recordings.rs

use log::info;
use std::path::{Path, PathBuf};

use crate::constants::{
    RECORDING_PREFIX_CURRENT, RECORDING_PREFIX_ORIGINAL, RECORDING_PREFIX_PREVIOUS,
};
use crate::data_input::steering_data::SteeringSample;
use crate::data_input::steering_parser::parse_steering_file;
use crate::error::ComparisonError;

/// Builds `<recordings_dir>/<prefix><run_id>.csv`.
pub fn recording_path(recordings_dir: &Path, prefix: &str, run_id: &str) -> PathBuf {
    recordings_dir.join(format!("{prefix}{run_id}.csv"))
}

/// The three datasets of a multi-commit comparison run.
#[derive(Debug, Clone)]
pub struct RunRecordings {
    /// Reference recording; its `groundSteering` column is the charted ground truth.
    pub original: Vec<SteeringSample>,
    /// Output of the commit under test. The accuracy comparator runs on this one.
    pub current: Vec<SteeringSample>,
    /// Output of the previous commit, charted for regression spotting.
    pub previous: Vec<SteeringSample>,
}

impl RunRecordings {
    /// Loads all three recordings of `run_id`.
    ///
    /// Every path is checked before any file is parsed, so a missing recording aborts
    /// the run without partial work.
    pub fn load(
        recordings_dir: &Path,
        run_id: &str,
        delimiter: u8,
    ) -> Result<Self, ComparisonError> {
        let paths = [
            RECORDING_PREFIX_ORIGINAL,
            RECORDING_PREFIX_CURRENT,
            RECORDING_PREFIX_PREVIOUS,
        ]
        .map(|prefix| recording_path(recordings_dir, prefix, run_id));

        if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
            return Err(ComparisonError::FileNotFound {
                path: missing.clone(),
            });
        }

        let [original_path, current_path, previous_path] = paths;
        info!("Loading recordings for run '{}'", run_id);
        Ok(Self {
            original: parse_steering_file(&original_path, delimiter)?,
            current: parse_steering_file(&current_path, delimiter)?,
            previous: parse_steering_file(&previous_path, delimiter)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BODY: &str = "sampleTimeStamp;groundSteering;output\n1;0.1;0.1\n2;0.2;0.3\n";

    #[test]
    fn test_recording_path() {
        let path = recording_path(Path::new("../recordings"), "current", "7");
        assert_eq!(path, PathBuf::from("../recordings/current7.csv"));
    }

    #[test]
    fn test_load_all_three() {
        let dir = tempfile::tempdir().unwrap();
        for prefix in ["original", "current", "previous"] {
            fs::write(dir.path().join(format!("{prefix}3.csv")), BODY).unwrap();
        }
        let run = RunRecordings::load(dir.path(), "3", b';').unwrap();
        assert_eq!(run.original.len(), 2);
        assert_eq!(run.current.len(), 2);
        assert_eq!(run.previous.len(), 2);
    }

    #[test]
    fn test_missing_previous_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for prefix in ["original", "current"] {
            fs::write(dir.path().join(format!("{prefix}3.csv")), BODY).unwrap();
        }
        match RunRecordings::load(dir.path(), "3", b';') {
            Err(ComparisonError::FileNotFound { path }) => {
                assert_eq!(path, dir.path().join("previous3.csv"))
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}

// src/data_input/run_recordings.rs
