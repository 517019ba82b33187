//! Run timestamp and the run-scoped names derived from it.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Timestamp identifying a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStamp(String);

impl RunStamp {
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    pub fn at<Tz: TimeZone>(time: DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(time.format(STAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `position-<ts>.pos`
    pub fn solution_file_name(&self) -> String {
        format!("position-{}.{}", self.0, SOLUTION_EXTENSION)
    }

    /// `ppk-<ts>.conf`
    pub fn config_file_name(&self) -> String {
        format!("ppk-{}.conf", self.0)
    }

    /// `rnx2rtkp-<ts>.log`
    pub fn solver_log_name(&self) -> String {
        format!("rnx2rtkp-{}.log", self.0)
    }

    /// `ppk-<ts>.log`
    pub fn run_log_name(&self) -> String {
        format!("ppk-{}.log", self.0)
    }

    /// `ppk-<ts>`
    pub fn result_dir_name(&self) -> String {
        format!("ppk-{}", self.0)
    }

    /// Prefix for the staging directory; a random suffix is appended on creation.
    pub fn staging_prefix(&self) -> String {
        format!("ppk-{}-", self.0)
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension of solver output files.
pub const SOLUTION_EXTENSION: &str = "pos";
