//! Run-scoped staging directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::domain::{AppError, RunStamp};

/// Receiver whose data lives in a staging subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Base,
    Rover,
}

impl Receiver {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Receiver::Base => "base",
            Receiver::Rover => "rover",
        }
    }
}

/// Uniquely named staging area holding `base/` and `rover/`.
///
/// The directory tree is removed when this value is dropped.
#[derive(Debug)]
pub struct WorkingDirectory {
    root: TempDir,
}

impl WorkingDirectory {
    /// Create the staging directory under `parent`.
    pub fn create(parent: &Path, stamp: &RunStamp) -> Result<Self, AppError> {
        let root = tempfile::Builder::new().prefix(&stamp.staging_prefix()).tempdir_in(parent)?;
        for receiver in [Receiver::Base, Receiver::Rover] {
            fs::create_dir(root.path().join(receiver.dir_name()))?;
        }
        debug!("Created staging directory {}", root.path().display());
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn receiver_dir(&self, receiver: Receiver) -> PathBuf {
        self.root.path().join(receiver.dir_name())
    }

    pub fn base(&self) -> PathBuf {
        self.receiver_dir(Receiver::Base)
    }

    pub fn rover(&self) -> PathBuf {
        self.receiver_dir(Receiver::Rover)
    }

    /// Copy an input into a receiver directory.
    ///
    /// A file is copied as-is; a directory contributes its top-level files.
    pub fn stage(&self, source: &Path, receiver: Receiver) -> Result<Vec<PathBuf>, AppError> {
        let target_dir = self.receiver_dir(receiver);
        let mut staged = Vec::new();

        if source.is_dir() {
            let mut entries = fs::read_dir(source)?.collect::<Result<Vec<_>, _>>()?;
            entries.sort_by_key(|entry| entry.file_name());
            for entry in entries {
                if entry.file_type()?.is_file() {
                    staged.push(copy_into(&entry.path(), &target_dir)?);
                }
            }
        } else {
            staged.push(copy_into(source, &target_dir)?);
        }

        debug!(
            "Staged {} file(s) from {} into {}",
            staged.len(),
            source.display(),
            receiver.dir_name()
        );
        Ok(staged)
    }
}

fn copy_into(file: &Path, dir: &Path) -> Result<PathBuf, AppError> {
    let name = file.file_name().ok_or_else(|| AppError::file_not_found("Input file", file))?;
    let target = dir.join(name);
    fs::copy(file, &target)?;
    Ok(target)
}
