//! Post-processing pipeline: stage, normalize, configure, solve, collect.

mod classify;
mod collect;
mod materialize;
mod normalize;
mod solve;
mod staging;

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::{AppError, ConfigOverrides, RolePatterns, RunStamp};
use crate::ports::{GnssToolkit, ToolExit};

pub use classify::{classify, resolve_navigation, unrecognized};
pub use collect::collect;
pub use materialize::{MaterializedConfig, apply_overrides, materialize};
pub use normalize::{ConversionSettings, NormalizedInputs, normalize};
pub use solve::solve;
pub use staging::{Receiver, WorkingDirectory};

/// Default sampling interval in seconds.
pub const DEFAULT_INTERVAL: f64 = 15.0;

/// Inputs of a single pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    pub interval: f64,
    pub config_template: PathBuf,
    pub rover: PathBuf,
    pub base: PathBuf,
    pub navigation: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub clock_adjust: bool,
    pub export_kml: bool,
}

impl ProcessOptions {
    pub fn new(config_template: PathBuf, rover: PathBuf, base: PathBuf) -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            config_template,
            rover,
            base,
            navigation: None,
            overrides: ConfigOverrides::default(),
            clock_adjust: true,
            export_kml: false,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub result_dir: PathBuf,
    pub solution: PathBuf,
    pub copied: Vec<PathBuf>,
    pub converted: bool,
    pub solver_exit: ToolExit,
    pub missing_config_keys: Vec<&'static str>,
    pub kml: Option<PathBuf>,
}

/// Run the pipeline.
///
/// Relative inputs are resolved against `cwd`, results land in `cwd`, and
/// the staging directory is created under `staging_parent` and removed
/// before this returns.
pub fn execute(
    options: &ProcessOptions,
    toolkit: &impl GnssToolkit,
    cwd: &Path,
    staging_parent: &Path,
    stamp: &RunStamp,
) -> Result<ProcessOutcome, AppError> {
    let options = validate(options, cwd)?;
    let patterns = RolePatterns::compile()?;

    let work = WorkingDirectory::create(staging_parent, stamp)?;
    let mut staged = work.stage(&options.rover, Receiver::Rover)?;
    staged.extend(work.stage(&options.base, Receiver::Base)?);
    if let Some(navigation) = &options.navigation {
        staged.extend(work.stage(navigation, Receiver::Base)?);
    }
    for file in unrecognized(&staged, &patterns) {
        warn!(
            "Ignoring {}: not an archive, raw capture, observation or navigation file",
            file.display()
        );
    }

    let settings =
        ConversionSettings { interval: options.interval, clock_adjust: options.clock_adjust };
    let inputs = normalize(&work, &patterns, toolkit, settings)?;
    info!("Using navigation file {}", inputs.navigation.display());

    let config = materialize(
        &options.config_template,
        &work.path().join(stamp.config_file_name()),
        &options.overrides,
    )?;

    let solver_exit = solve(toolkit, &work, &inputs, &config.path, options.interval, stamp)?;

    let result_dir = cwd.join(stamp.result_dir_name());
    let copied = collect(work.path(), &result_dir, stamp)?;
    let solution = result_dir.join(stamp.solution_file_name());

    let kml = if options.export_kml { export_kml(toolkit, &solution)? } else { None };

    Ok(ProcessOutcome {
        result_dir,
        solution,
        copied,
        converted: inputs.converted,
        solver_exit,
        missing_config_keys: config.missing_keys,
        kml,
    })
}

/// Check every input before anything is staged, resolving relative paths.
fn validate(options: &ProcessOptions, cwd: &Path) -> Result<ProcessOptions, AppError> {
    let mut resolved = options.clone();

    resolved.config_template =
        require_existing("-c", "Configuration template", &options.config_template, cwd)?;
    if !resolved.config_template.is_file() {
        return Err(AppError::file_not_found("Configuration template", &resolved.config_template));
    }
    resolved.rover = require_existing("-r", "Rover input", &options.rover, cwd)?;
    resolved.base = require_existing("-b", "Base input", &options.base, cwd)?;
    if let Some(navigation) = &options.navigation {
        resolved.navigation = Some(require_existing("-n", "Navigation file", navigation, cwd)?);
    }
    if let Some(calibration) = &options.overrides.antenna_calibration {
        let path = require_existing("-f", "Antenna calibration file", Path::new(calibration), cwd)?;
        resolved.overrides.antenna_calibration = Some(path.to_string_lossy().into_owned());
    }
    Ok(resolved)
}

fn require_existing(
    flag: &str,
    what: &str,
    path: &Path,
    cwd: &Path,
) -> Result<PathBuf, AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::MissingRequiredArgument(format!("{} ({})", flag, what)));
    }
    let absolute = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
    if !absolute.exists() {
        return Err(AppError::file_not_found(what, path));
    }
    Ok(absolute)
}

fn export_kml(toolkit: &impl GnssToolkit, solution: &Path) -> Result<Option<PathBuf>, AppError> {
    let exit = toolkit.export_kml(solution)?;
    let kml = solution.with_extension("kml");
    if exit.is_success() && kml.is_file() {
        info!("Exported {}", kml.display());
        Ok(Some(kml))
    } else {
        warn!("KML export of {} failed with {:?}", solution.display(), exit.code);
        Ok(None)
    }
}
