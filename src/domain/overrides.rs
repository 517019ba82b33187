//! Configuration overrides applied to the solver template.

use std::fmt;

use clap::ValueEnum;

/// Output solution format written by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SolutionFormat {
    #[default]
    Llh,
    Enu,
    Xyz,
    Nmea,
}

impl SolutionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionFormat::Llh => "llh",
            SolutionFormat::Enu => "enu",
            SolutionFormat::Xyz => "xyz",
            SolutionFormat::Nmea => "nmea",
        }
    }
}

impl fmt::Display for SolutionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the solver emits every epoch or a single static solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SolutionMode {
    All,
    #[default]
    Single,
}

impl SolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionMode::All => "all",
            SolutionMode::Single => "single",
        }
    }
}

impl fmt::Display for SolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const KEY_ANTENNA_TYPE: &str = "ant1-anttype";
pub const KEY_ANTENNA_CALIBRATION: &str = "file-rcvantfile";
pub const KEY_ANTENNA_HEIGHT: &str = "ant1-antdelu";
pub const KEY_SOLUTION_FORMAT: &str = "out-solformat";
pub const KEY_SOLUTION_MODE: &str = "out-solstatic";

/// User-supplied overrides. Unset antenna fields keep the template values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub antenna_type: Option<String>,
    pub antenna_calibration: Option<String>,
    pub antenna_height: Option<f64>,
    pub solution_format: SolutionFormat,
    pub solution_mode: SolutionMode,
}

impl ConfigOverrides {
    /// Key/value pairs to substitute, in template order of precedence.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(antenna_type) = &self.antenna_type {
            entries.push((KEY_ANTENNA_TYPE, antenna_type.clone()));
        }
        if let Some(calibration) = &self.antenna_calibration {
            entries.push((KEY_ANTENNA_CALIBRATION, calibration.clone()));
        }
        if let Some(height) = self.antenna_height {
            entries.push((KEY_ANTENNA_HEIGHT, format!("{:.4}", height)));
        }
        entries.push((KEY_SOLUTION_FORMAT, self.solution_format.to_string()));
        entries.push((KEY_SOLUTION_MODE, self.solution_mode.to_string()));
        entries
    }
}
