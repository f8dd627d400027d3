// src/lib.rs - Library interface for the steering comparison tool

pub mod comparison;
pub mod comparison_config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;

pub use comparison::LoadedComparison;
pub use comparison_config::{ComparisonConfig, ComparisonMode};
pub use data_analysis::accuracy::{compare_values, ComparisonResult, ToleranceVariant};
pub use data_input::steering_data::SteeringSample;
pub use error::ComparisonError;

// Crate version, preferring a vergen-provided git semver when the build sets one.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
