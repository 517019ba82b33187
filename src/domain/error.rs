use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ppk operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Toolkit configuration issue.
    #[error("{0}")]
    Config(String),

    /// A required command-line argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// An input path given on the command line does not exist.
    #[error("{what} not found: {}", .path.display())]
    FileNotFound { what: String, path: PathBuf },

    /// A staged input directory has no entries to classify.
    #[error("Directory is empty: {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// Neither the base nor the rover directory holds a navigation file.
    #[error("No navigation file found in base or rover data")]
    MissingNavigationFile,

    /// Normalization left a directory without an observation file.
    #[error("Conversion failed: no observation file in {}", .0.display())]
    ConversionFailure(PathBuf),

    /// More than one observation file resolved for a single receiver.
    #[error("Ambiguous input: {count} observation files in {}", .dir.display())]
    AmbiguousInput { dir: PathBuf, count: usize },

    /// The solver did not leave a solution file behind.
    #[error("No solution output produced in {}", .0.display())]
    NoOutputProduced(PathBuf),

    /// An external toolkit binary could not be spawned.
    #[error("Toolkit binary '{program}' unavailable: {details}")]
    ToolkitUnavailable { program: String, details: String },

    /// File role pattern failed to compile.
    #[error("Invalid file pattern: {0}")]
    Regex(#[from] regex::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }

    pub fn file_not_found<S: Into<String>>(what: S, path: impl Into<PathBuf>) -> Self {
        AppError::FileNotFound { what: what.into(), path: path.into() }
    }
}
