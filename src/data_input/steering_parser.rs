// src/data_input/steering_parser.rs

use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::constants::{HEADER_GROUND_STEERING, HEADER_OUTPUT, HEADER_SAMPLE_TIME_STAMP};
use crate::data_input::steering_data::SteeringSample;
use crate::error::ComparisonError;

const TARGET_HEADERS: [&str; 3] = [
    HEADER_SAMPLE_TIME_STAMP, // 0
    HEADER_GROUND_STEERING,   // 1
    HEADER_OUTPUT,            // 2
];

/// Parses a steering recording into samples, preserving file order.
///
/// Headers are matched by name after trimming, so extra columns and any column order are accepted.
/// Rows whose required fields are missing or non-numeric are skipped with a warning.
///
/// # Errors
/// * `FileNotFound` when `input_file_path` does not exist.
/// * `MissingColumns` when any of `sampleTimeStamp`, `groundSteering`, `output` is absent.
/// * `Csv` / `Io` when the header row itself cannot be read.
pub fn parse_steering_file(
    input_file_path: &Path,
    delimiter: u8,
) -> Result<Vec<SteeringSample>, ComparisonError> {
    if !input_file_path.is_file() {
        return Err(ComparisonError::FileNotFound {
            path: input_file_path.to_path_buf(),
        });
    }

    let file = File::open(input_file_path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    debug!("Headers found in {}: {:?}", input_file_path.display(), header_record);

    let header_indices: Vec<Option<usize>> = TARGET_HEADERS
        .iter()
        .map(|&target_header| header_record.iter().position(|h| h.trim() == target_header))
        .collect();

    let missing: Vec<String> = TARGET_HEADERS
        .iter()
        .zip(&header_indices)
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| format!("'{}'", name))
        .collect();
    if !missing.is_empty() {
        return Err(ComparisonError::MissingColumns {
            path: input_file_path.to_path_buf(),
            columns: missing,
        });
    }

    // --- Data Reading ---
    let mut samples: Vec<SteeringSample> = Vec::new();
    let mut skipped_rows = 0usize;
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                skipped_rows += 1;
                continue;
            }
        };

        let parse_f64_by_target_idx = |target_idx: usize| -> Option<f64> {
            header_indices
                .get(target_idx)
                .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                .and_then(|&csv_idx| record.get(csv_idx))
                .and_then(|val_str| val_str.parse::<f64>().ok())
        };

        match (
            parse_f64_by_target_idx(0),
            parse_f64_by_target_idx(1),
            parse_f64_by_target_idx(2),
        ) {
            (Some(time_stamp), Some(ground_steering), Some(output)) => {
                samples.push(SteeringSample::new(time_stamp, ground_steering, output));
            }
            _ => {
                warn!(
                    "Skipping row {} of {}: missing or non-numeric field",
                    row_index + 1,
                    input_file_path.display()
                );
                skipped_rows += 1;
            }
        }
    }

    info!(
        "Read {} samples from {} ({} rows skipped)",
        samples.len(),
        input_file_path.display(),
        skipped_rows
    );
    Ok(samples)
}


// src/data_input/steering_parser.rs
