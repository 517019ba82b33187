use std::path::Path;

use crate::domain::AppError;

/// Exit code reported by an external toolkit invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ToolExit {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Resolved inputs of a single solver invocation.
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest<'a> {
    pub rover_obs: &'a Path,
    pub base_obs: &'a Path,
    pub navigation: &'a Path,
    pub config: &'a Path,
    pub interval: f64,
    pub output: &'a Path,
    /// stdout and stderr of the solver are appended here.
    pub log_file: &'a Path,
}

/// The external GNSS post-processing toolkit.
///
/// Implementations return `Err` only when a program cannot be started.
/// Non-zero exits are reported through `ToolExit`.
pub trait GnssToolkit {
    /// Extract an archive into `out_dir` without overwriting existing files.
    fn extract_archive(&self, archive: &Path, out_dir: &Path) -> Result<ToolExit, AppError>;

    /// Convert a raw receiver capture into observation/navigation files in `out_dir`.
    fn convert(
        &self,
        raw_capture: &Path,
        interval: f64,
        clock_adjust: bool,
        out_dir: &Path,
    ) -> Result<ToolExit, AppError>;

    /// Compute a position solution.
    fn solve(&self, request: &SolveRequest<'_>) -> Result<ToolExit, AppError>;

    /// Export a solution file to KML next to it.
    fn export_kml(&self, solution: &Path) -> Result<ToolExit, AppError>;
}
