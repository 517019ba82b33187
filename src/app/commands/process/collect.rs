//! Copy run artifacts out of the staging directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::domain::{AppError, RunStamp, SOLUTION_EXTENSION};

/// Copy every staged file carrying the run timestamp into `destination`.
///
/// Fails with `NoOutputProduced`, creating nothing, when the staging
/// directory holds no solution file. An existing `destination` is an error.
pub fn collect(
    staging: &Path,
    destination: &Path,
    stamp: &RunStamp,
) -> Result<Vec<PathBuf>, AppError> {
    let files = staged_files(staging)?;

    let has_solution = files.iter().any(|path| {
        path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(SOLUTION_EXTENSION))
    });
    if !has_solution {
        return Err(AppError::NoOutputProduced(staging.to_path_buf()));
    }

    fs::create_dir(destination)?;
    let mut copied = Vec::new();
    for file in files {
        let Some(name) = file.file_name() else { continue };
        if !name.to_string_lossy().contains(stamp.as_str()) {
            continue;
        }
        let target = destination.join(name);
        fs::copy(&file, &target)?;
        copied.push(target);
    }

    info!("Collected {} file(s) into {}", copied.len(), destination.display());
    Ok(copied)
}

fn staged_files(staging: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(staging)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
