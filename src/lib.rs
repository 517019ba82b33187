//! ppk: Orchestrate base/rover GNSS post-processing through an external RTK toolkit.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::env;
use std::path::PathBuf;

use adapters::CommandToolkit;
use app::config::{CONFIG_ENV, load_config};

pub use app::commands::process::{ProcessOptions, ProcessOutcome};
pub use domain::{AppError, ConfigOverrides, RunStamp, SolutionFormat, SolutionMode};

/// Run the post-processing pipeline from the current directory.
///
/// Toolkit binaries come from `$PPK_TOOLKIT_CONFIG` or `./.ppk.toml` when
/// present. Staging happens under the system temporary directory and the
/// results are copied to `./ppk-<timestamp>/`.
pub fn process(options: &ProcessOptions, stamp: &RunStamp) -> Result<ProcessOutcome, AppError> {
    let cwd = env::current_dir()?;
    let config = load_config(&cwd, env::var_os(CONFIG_ENV).map(PathBuf::from))?;
    let toolkit = CommandToolkit::new(config.toolkit);

    app::commands::process::execute(options, &toolkit, &cwd, &env::temp_dir(), stamp)
}
