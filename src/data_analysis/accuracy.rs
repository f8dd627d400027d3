// src/data_analysis/accuracy.rs

use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

use crate::constants::{PERCENTAGE_DECIMALS, TOLERANCE_LOWER_FACTOR, TOLERANCE_UPPER_FACTOR};
use crate::data_input::steering_data::SteeringSample;
use crate::error::ComparisonError;

/// How a sample's output is judged against the ±25% band around its reference.
///
/// The two policies disagree on negative values and are kept separate on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceVariant {
    /// Used for multi-commit comparisons.
    ///
    /// Non-negative output: valid when `lower < output < upper`.
    /// Negative output: valid when `output < lower && output > upper`. That range is only
    /// non-empty for a negative reference (where `lower > upper`), so a negative output
    /// against a positive reference never matches.
    SignAware,
    /// Used for single-file comparisons.
    ///
    /// Valid when `lower < output < upper` regardless of sign. For a negative reference
    /// `lower > upper`, so such samples never match.
    Unconditional,
}

impl ToleranceVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToleranceVariant::SignAware => "sign-aware",
            ToleranceVariant::Unconditional => "unconditional",
        }
    }
}

impl fmt::Display for ToleranceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToleranceVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sign-aware" | "a" => Ok(ToleranceVariant::SignAware),
            "unconditional" | "b" => Ok(ToleranceVariant::Unconditional),
            other => Err(format!(
                "unknown tolerance variant '{other}' (expected 'sign-aware' or 'unconditional')"
            )),
        }
    }
}

/// Lower and upper tolerance bounds for a reference value.
///
/// For a negative reference the "lower" bound is the larger number.
pub fn tolerance_bounds(ground_steering: f64) -> (f64, f64) {
    (
        ground_steering * TOLERANCE_LOWER_FACTOR,
        ground_steering * TOLERANCE_UPPER_FACTOR,
    )
}

/// Judges one (reference, output) pair. Callers must skip zero references first.
pub fn is_within_tolerance(ground_steering: f64, output: f64, variant: ToleranceVariant) -> bool {
    let (lower_bound, upper_bound) = tolerance_bounds(ground_steering);
    match variant {
        ToleranceVariant::SignAware => {
            if output >= 0.0 {
                output > lower_bound && output < upper_bound
            } else {
                output < lower_bound && output > upper_bound
            }
        }
        ToleranceVariant::Unconditional => output > lower_bound && output < upper_bound,
    }
}

/// Outcome of one comparator run. `data_points_evaluated` is always nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonResult {
    pub data_points_evaluated: usize,
    pub valid_count: usize,
}

impl ComparisonResult {
    /// Unrounded share of valid samples, in percent.
    pub fn raw_percentage(&self) -> f64 {
        self.valid_count as f64 / self.data_points_evaluated as f64 * 100.0
    }

    /// Share of valid samples rounded to two decimals, as reported to the user.
    pub fn percentage(&self) -> f64 {
        round_to_decimals(self.raw_percentage(), PERCENTAGE_DECIMALS)
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing ".0" on whole percentages.
        write!(f, "Percentage: {:?} %", self.percentage())
    }
}

/// Rounds half-way cases to the even neighbour, so 3.125 becomes 3.12.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Counts how many samples with a nonzero reference fall within tolerance.
///
/// # Errors
/// `NoEvaluableData` when no sample has a nonzero `ground_steering`.
pub fn compare_values(
    samples: &[SteeringSample],
    variant: ToleranceVariant,
) -> Result<ComparisonResult, ComparisonError> {
    let mut data_points_evaluated = 0usize;
    let mut valid_count = 0usize;

    for sample in samples.iter().filter(|s| s.has_reference()) {
        data_points_evaluated += 1;
        let is_valid = is_within_tolerance(sample.ground_steering, sample.output, variant);
        if is_valid {
            valid_count += 1;
        }
        trace!(
            "groundSteering: {}, output: {}; {}",
            sample.ground_steering,
            sample.output,
            is_valid
        );
    }

    if data_points_evaluated == 0 {
        return Err(ComparisonError::NoEvaluableData);
    }

    debug!(
        "{} variant: {} of {} samples within tolerance ({} zero-reference samples skipped)",
        variant,
        valid_count,
        data_points_evaluated,
        samples.len() - data_points_evaluated
    );

    Ok(ComparisonResult {
        data_points_evaluated,
        valid_count,
    })
}


// src/data_analysis/accuracy.rs
