//! Console and run-log output for a pipeline run.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::domain::AppError;

/// Writer duplicating log records to stderr and the run log file.
struct RunLogWriter {
    file: File,
}

impl Write for RunLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

/// Install the global logger, appending every record to `run_log`.
///
/// The level defaults to `info` and follows `RUST_LOG` when set.
pub fn init(run_log: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(run_log)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(RunLogWriter { file })))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))
}

/// Append one line to `run_log` regardless of the active log filter.
pub fn append_line(run_log: &Path, line: &str) -> Result<(), AppError> {
    let mut file = OpenOptions::new().create(true).append(true).open(run_log)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
