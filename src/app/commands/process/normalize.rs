//! Bring staged receiver data into observation/navigation form.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::classify::{classify_role, resolve_navigation};
use super::staging::{Receiver, WorkingDirectory};
use crate::domain::{AppError, FileRole, RolePatterns};
use crate::ports::GnssToolkit;

/// Converter settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSettings {
    pub interval: f64,
    pub clock_adjust: bool,
}

/// Resolved solver inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputs {
    pub rover_obs: PathBuf,
    pub base_obs: PathBuf,
    pub navigation: PathBuf,
    /// False when the staged data was already in observation/navigation form.
    pub converted: bool,
}

pub fn normalize(
    work: &WorkingDirectory,
    patterns: &RolePatterns,
    toolkit: &impl GnssToolkit,
    settings: ConversionSettings,
) -> Result<NormalizedInputs, AppError> {
    let base = work.base();
    let rover = work.rover();

    if let Some(inputs) = already_normalized(&base, &rover, patterns)? {
        info!("Inputs already in observation/navigation form, skipping conversion");
        return Ok(inputs);
    }

    for receiver in [Receiver::Base, Receiver::Rover] {
        normalize_receiver(&work.receiver_dir(receiver), receiver, patterns, toolkit, settings)?;
    }

    Ok(NormalizedInputs {
        rover_obs: require_observation(&rover, patterns)?,
        base_obs: require_observation(&base, patterns)?,
        navigation: resolve_navigation(&base, &rover, patterns)?,
        converted: true,
    })
}

fn already_normalized(
    base: &Path,
    rover: &Path,
    patterns: &RolePatterns,
) -> Result<Option<NormalizedInputs>, AppError> {
    let base_obs = classify_role(base, patterns, FileRole::Observation)?;
    let rover_obs = classify_role(rover, patterns, FileRole::Observation)?;
    if base_obs.len() != 1 || rover_obs.len() != 1 {
        return Ok(None);
    }

    match resolve_navigation(base, rover, patterns) {
        Ok(navigation) => Ok(Some(NormalizedInputs {
            rover_obs: rover_obs[0].clone(),
            base_obs: base_obs[0].clone(),
            navigation,
            converted: false,
        })),
        Err(AppError::MissingNavigationFile) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Extract archives, then convert raw captures, in one receiver directory.
fn normalize_receiver(
    dir: &Path,
    receiver: Receiver,
    patterns: &RolePatterns,
    toolkit: &impl GnssToolkit,
    settings: ConversionSettings,
) -> Result<(), AppError> {
    for archive in classify_role(dir, patterns, FileRole::Archive)? {
        info!("Extracting {} ({})", file_name(&archive), receiver.dir_name());
        let exit = toolkit.extract_archive(&archive, dir)?;
        if !exit.is_success() {
            warn!("Extraction of {} exited with {:?}", file_name(&archive), exit.code);
        }
    }

    for raw in classify_role(dir, patterns, FileRole::RawCapture)? {
        info!(
            "Converting {} ({}) at {}s interval",
            file_name(&raw),
            receiver.dir_name(),
            settings.interval
        );
        let exit = toolkit.convert(&raw, settings.interval, settings.clock_adjust, dir)?;
        if !exit.is_success() {
            warn!("Conversion of {} exited with {:?}", file_name(&raw), exit.code);
        }
    }
    Ok(())
}

fn require_observation(dir: &Path, patterns: &RolePatterns) -> Result<PathBuf, AppError> {
    let mut found = classify_role(dir, patterns, FileRole::Observation)?;
    match found.len() {
        0 => Err(AppError::ConversionFailure(dir.to_path_buf())),
        1 => Ok(found.remove(0)),
        count => Err(AppError::AmbiguousInput { dir: dir.to_path_buf(), count }),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
