use std::path::Path;

use log::{info, warn};

use super::normalize::NormalizedInputs;
use super::staging::WorkingDirectory;
use crate::domain::{AppError, RunStamp};
use crate::ports::{GnssToolkit, SolveRequest, ToolExit};

/// Run the solver once, writing the solution and solver log into the
/// staging root. A non-zero exit is logged, not raised.
pub fn solve(
    toolkit: &impl GnssToolkit,
    work: &WorkingDirectory,
    inputs: &NormalizedInputs,
    config: &Path,
    interval: f64,
    stamp: &RunStamp,
) -> Result<ToolExit, AppError> {
    let output = work.path().join(stamp.solution_file_name());
    let log_file = work.path().join(stamp.solver_log_name());

    info!(
        "Solving rover {} against base {}",
        inputs.rover_obs.display(),
        inputs.base_obs.display()
    );
    let exit = toolkit.solve(&SolveRequest {
        rover_obs: &inputs.rover_obs,
        base_obs: &inputs.base_obs,
        navigation: &inputs.navigation,
        config,
        interval,
        output: &output,
        log_file: &log_file,
    })?;

    if !exit.is_success() {
        warn!(
            "Solver exited with non-zero status {:?}, see {}",
            exit.code,
            stamp.solver_log_name()
        );
    }
    Ok(exit)
}
