//! CLI Adapter.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::app::commands::process::{DEFAULT_INTERVAL, ProcessOptions, ProcessOutcome};
use crate::app::logging;
use crate::domain::{ConfigOverrides, RunStamp, SolutionFormat, SolutionMode};

#[derive(Parser, Debug)]
#[command(name = "ppk")]
#[command(version)]
#[command(
    about = "Post-process base/rover GNSS data into an RTK position solution",
    long_about = None
)]
struct Cli {
    /// Sampling interval in seconds
    #[arg(short = 'i', long, default_value_t = DEFAULT_INTERVAL, value_parser = parse_interval)]
    interval: f64,
    /// Solver configuration template
    #[arg(short = 'c', long = "config")]
    config: PathBuf,
    /// Rover data: observation file, raw capture, archive, or a directory of them
    #[arg(short = 'r', long)]
    rover: PathBuf,
    /// Base data: observation file, raw capture, archive, or a directory of them
    #[arg(short = 'b', long)]
    base: PathBuf,
    /// Navigation file (discovered in base, then rover data when omitted)
    #[arg(short = 'n', long = "nav")]
    navigation: Option<PathBuf>,
    /// Receiver antenna calibration file
    #[arg(short = 'f', long = "antenna-file")]
    antenna_file: Option<String>,
    /// Antenna type label
    #[arg(short = 't', long = "antenna-type")]
    antenna_type: Option<String>,
    /// Antenna height in meters
    #[arg(short = 'H', long = "antenna-height", allow_negative_numbers = true)]
    antenna_height: Option<f64>,
    /// Output solution format
    #[arg(short = 's', long = "solution-format", value_enum, default_value_t)]
    solution_format: SolutionFormat,
    /// Output every epoch or a single solution
    #[arg(short = 'o', long = "solution-mode", value_enum, default_value_t)]
    solution_mode: SolutionMode,
    /// Export the solution to KML after collection
    #[arg(long)]
    kml: bool,
    /// Disable receiver clock adjustment during raw capture conversion
    #[arg(long)]
    no_clock_adjust: bool,
}

impl Cli {
    fn into_options(self) -> ProcessOptions {
        ProcessOptions {
            interval: self.interval,
            config_template: self.config,
            rover: self.rover,
            base: self.base,
            navigation: self.navigation,
            overrides: ConfigOverrides {
                antenna_type: self.antenna_type,
                antenna_calibration: self.antenna_file,
                antenna_height: self.antenna_height,
                solution_format: self.solution_format,
                solution_mode: self.solution_mode,
            },
            clock_adjust: !self.no_clock_adjust,
            export_kml: self.kml,
        }
    }
}

fn parse_interval(value: &str) -> Result<f64, String> {
    let interval: f64 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    if !interval.is_finite() || interval <= 0.0 {
        return Err(format!("interval must be a positive number of seconds, got {}", value));
    }
    Ok(interval)
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let stamp = RunStamp::now();

    let run_log = match env::current_dir() {
        Ok(cwd) => {
            let run_log = cwd.join(stamp.run_log_name());
            match logging::init(&run_log) {
                Ok(()) => Some(run_log),
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("Warning: cannot resolve working directory: {}", e);
            None
        }
    };

    match crate::process(&cli.into_options(), &stamp) {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            let line = format!("Error: {}", e);
            eprintln!("{}", line);
            if let Some(run_log) = &run_log {
                if let Err(log_err) = logging::append_line(run_log, &line) {
                    eprintln!("Warning: cannot write {}: {}", run_log.display(), log_err);
                }
            }
            std::process::exit(1);
        }
    }
}

fn report(outcome: &ProcessOutcome) {
    if !outcome.solver_exit.is_success() {
        info!("Solver reported exit code {:?} but produced output", outcome.solver_exit.code);
    }
    for key in &outcome.missing_config_keys {
        println!("⚠️  Configuration template has no '{}' line; override skipped", key);
    }
    println!("✅ Solution written to {}", outcome.solution.display());
    if let Some(kml) = &outcome.kml {
        println!("✅ KML exported to {}", kml.display());
    }
}
