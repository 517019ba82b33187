//! Input classification by file name pattern.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::domain::{AppError, FileRole, RolePatterns};

/// List files in `directory` whose names match `pattern`, sorted by name.
pub fn classify(directory: &Path, pattern: &Regex) -> Result<Vec<PathBuf>, AppError> {
    let mut entries = fs::read_dir(directory)?.collect::<Result<Vec<_>, _>>()?;
    if entries.is_empty() {
        return Err(AppError::EmptyDirectory(directory.to_path_buf()));
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut matches = Vec::new();
    for entry in entries {
        if !entry.file_type()?.is_file() {
            continue;
        }
        if pattern.is_match(&entry.file_name().to_string_lossy()) {
            matches.push(entry.path());
        }
    }
    Ok(matches)
}

/// Classify `directory` for a single role.
pub fn classify_role(
    directory: &Path,
    patterns: &RolePatterns,
    role: FileRole,
) -> Result<Vec<PathBuf>, AppError> {
    let found = classify(directory, patterns.get(role))?;
    debug!("{} {} file(s) in {}", found.len(), role.display_name(), directory.display());
    Ok(found)
}

/// Staged files whose names match no known role.
pub fn unrecognized<'a>(files: &'a [PathBuf], patterns: &RolePatterns) -> Vec<&'a PathBuf> {
    files
        .iter()
        .filter(|path| {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            patterns.role_of(&name).is_none()
        })
        .collect()
}

/// Resolve the navigation file: `base` first, then `rover`.
pub fn resolve_navigation(
    base: &Path,
    rover: &Path,
    patterns: &RolePatterns,
) -> Result<PathBuf, AppError> {
    for dir in [base, rover] {
        if let Some(nav) = classify_role(dir, patterns, FileRole::Navigation)?.into_iter().next() {
            return Ok(nav);
        }
    }
    Err(AppError::MissingNavigationFile)
}
