// src/main.rs

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use steering_compare::comparison::run_comparison;
use steering_compare::constants::{DEFAULT_RECORDINGS_DIR, DEFAULT_SINGLE_INPUT};
use steering_compare::{
    crate_version, ComparisonConfig, ComparisonError, ComparisonMode, LoadedComparison,
    ToleranceVariant,
};

/// Compare steering output against recorded groundSteering.
///
/// With RUN_ID, compares `original<RUN_ID>.csv`, `current<RUN_ID>.csv` and
/// `previous<RUN_ID>.csv` from the recordings directory. Without it, compares
/// the reference and output columns of a single file.
#[derive(Parser, Debug)]
#[command(name = "steering-compare", version = crate_version())]
struct Cli {
    /// Run identifier suffixed to the multi-commit recording names.
    run_id: Option<String>,

    /// Directory holding the multi-commit recordings.
    #[arg(long, default_value = DEFAULT_RECORDINGS_DIR)]
    recordings_dir: PathBuf,

    /// Input file for the single-file comparison.
    #[arg(long, default_value = DEFAULT_SINGLE_INPUT)]
    input: PathBuf,

    /// Column separator (defaults to ';' with RUN_ID, ',' without).
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Tolerance policy: sign-aware or unconditional (defaults by mode).
    #[arg(long)]
    variant: Option<ToleranceVariant>,

    /// Chart output path (defaults to plot_<RUN_ID>.png or steering_comparison.png).
    #[arg(long, conflicts_with = "no_chart")]
    chart_output: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(long)]
    no_chart: bool,

    /// Skip the accuracy percentage.
    #[arg(long)]
    skip_accuracy: bool,

    /// Text drawn faintly across the chart.
    #[arg(long)]
    watermark: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv per-sample trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}

impl Cli {
    fn into_config(self) -> ComparisonConfig {
        let mode = match self.run_id {
            Some(run_id) => ComparisonMode::MultiCommit {
                recordings_dir: self.recordings_dir,
                run_id,
            },
            None => ComparisonMode::SingleFile { input: self.input },
        };
        let mut config = ComparisonConfig::new(mode)
            .with_watermark(self.watermark)
            .with_accuracy(!self.skip_accuracy);
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }
        if let Some(variant) = self.variant {
            config = config.with_variant(variant);
        }
        if self.no_chart {
            config = config.with_chart_output(None);
        } else if let Some(path) = self.chart_output {
            config = config.with_chart_output(Some(path));
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn report(err: &ComparisonError) {
    if err.is_file_not_found() {
        println!("File not found.");
        error!("{err}");
    } else {
        eprintln!("Error: {err}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.into_config();
    info!("steering-compare {} ({:?})", crate_version(), config.mode);

    let loaded = match LoadedComparison::load(&config) {
        Ok(loaded) => loaded,
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    };

    let outcome = run_comparison(&loaded, &config);
    match &outcome.accuracy {
        Ok(Some(result)) => println!("{result}"),
        Ok(None) => {}
        Err(err) => report(err),
    }
    if let Err(err) = &outcome.chart {
        report(err);
    }
    if !outcome.is_success() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn test_run_id_selects_multi_commit() {
        let config = Cli::parse_from(["steering-compare", "5"]).into_config();
        assert_eq!(
            config.mode,
            ComparisonMode::MultiCommit {
                recordings_dir: PathBuf::from("../recordings"),
                run_id: "5".to_string(),
            }
        );
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.variant, ToleranceVariant::SignAware);
        assert_eq!(config.chart_output, Some(PathBuf::from("plot_5.png")));
    }

    #[test]
    fn test_no_args_selects_single_file() {
        let config = Cli::parse_from(["steering-compare"]).into_config();
        assert_eq!(
            config.mode,
            ComparisonMode::SingleFile {
                input: PathBuf::from("src/output.csv")
            }
        );
        assert_eq!(config.variant, ToleranceVariant::Unconditional);
    }

    #[test]
    fn test_overrides() {
        let config = Cli::parse_from([
            "steering-compare",
            "--delimiter",
            ";",
            "--variant",
            "sign-aware",
            "--no-chart",
            "--skip-accuracy",
        ])
        .into_config();
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.variant, ToleranceVariant::SignAware);
        assert!(config.chart_output.is_none());
        assert!(!config.compute_accuracy);
    }
}
