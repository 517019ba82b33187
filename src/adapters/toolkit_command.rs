use std::fs::OpenOptions;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use log::{debug, warn};

use crate::domain::{AppError, ToolkitConfig};
use crate::ports::{GnssToolkit, SolveRequest, ToolExit};

/// Toolkit adapter that runs the configured binaries as child processes.
#[derive(Debug, Clone)]
pub struct CommandToolkit {
    config: ToolkitConfig,
}

impl CommandToolkit {
    pub fn new(config: ToolkitConfig) -> Self {
        Self { config }
    }

    fn describe(program: &str, args: &[String]) -> String {
        format!("{} {}", program, args.join(" "))
    }

    /// Run a program, capturing its output into the log.
    fn run(&self, program: &str, args: &[String]) -> Result<ToolExit, AppError> {
        debug!("Running {}", Self::describe(program, args));

        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::ToolkitUnavailable { program: program.to_string(), details: e.to_string() }
        })?;

        Self::log_output(program, &output);
        Ok(ToolExit { code: output.status.code() })
    }

    fn log_output(program: &str, output: &Output) {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stdout.lines().chain(stderr.lines()).filter(|l| !l.trim().is_empty()) {
            debug!("[{}] {}", program, line);
        }
        if !output.status.success() {
            let stderr = stderr.trim();
            warn!(
                "{} exited with {}: {}",
                program,
                output.status,
                if stderr.is_empty() { "no diagnostics" } else { stderr }
            );
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl GnssToolkit for CommandToolkit {
    fn extract_archive(&self, archive: &Path, out_dir: &Path) -> Result<ToolExit, AppError> {
        let args = vec!["-n".to_string(), path_arg(archive), "-d".to_string(), path_arg(out_dir)];
        self.run(&self.config.unzip, &args)
    }

    fn convert(
        &self,
        raw_capture: &Path,
        interval: f64,
        clock_adjust: bool,
        out_dir: &Path,
    ) -> Result<ToolExit, AppError> {
        let mut args =
            vec!["-r".to_string(), "ubx".to_string(), "-ti".to_string(), interval.to_string()];
        if clock_adjust {
            args.push("-tadj".to_string());
            args.push(interval.to_string());
        }
        args.push("-d".to_string());
        args.push(path_arg(out_dir));
        args.push(path_arg(raw_capture));
        self.run(&self.config.convbin, &args)
    }

    fn solve(&self, request: &SolveRequest<'_>) -> Result<ToolExit, AppError> {
        let program = &self.config.rnx2rtkp;
        let args = vec![
            "-k".to_string(),
            path_arg(request.config),
            "-ti".to_string(),
            request.interval.to_string(),
            "-o".to_string(),
            path_arg(request.output),
            path_arg(request.rover_obs),
            path_arg(request.base_obs),
            path_arg(request.navigation),
        ];
        debug!("Running {}", Self::describe(program, &args));

        let log = OpenOptions::new().create(true).append(true).open(request.log_file)?;
        let status = Command::new(program)
            .args(&args)
            .stdout(Stdio::from(log.try_clone()?))
            .stderr(Stdio::from(log))
            .status()
            .map_err(|e| AppError::ToolkitUnavailable {
                program: program.to_string(),
                details: e.to_string(),
            })?;

        Ok(ToolExit { code: status.code() })
    }

    fn export_kml(&self, solution: &Path) -> Result<ToolExit, AppError> {
        self.run(&self.config.pos2kml, &[path_arg(solution)])
    }
}
