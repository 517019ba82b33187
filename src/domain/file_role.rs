//! File roles recognized in staged receiver directories.

use regex::Regex;

use crate::domain::AppError;

/// Role a staged file plays in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    Archive,
    RawCapture,
    Observation,
    Navigation,
}

impl FileRole {
    /// All roles in precedence order.
    pub const ALL: [FileRole; 4] =
        [FileRole::Archive, FileRole::RawCapture, FileRole::Observation, FileRole::Navigation];

    /// Case-insensitive file name pattern for this role.
    pub fn pattern(&self) -> &'static str {
        match self {
            FileRole::Archive => r"(?i)\.zip$",
            FileRole::RawCapture => r"(?i)\.ubx$",
            // .obs, RINEX 2 (.21o) and RINEX 3 long names (_MO.rnx)
            FileRole::Observation => r"(?i)(\.obs|\.\d{2}o|_[a-z]o\.rnx)$",
            FileRole::Navigation => r"(?i)(\.nav|\.\d{2}[nglpfhq]|_[a-z]n\.rnx)$",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FileRole::Archive => "archive",
            FileRole::RawCapture => "raw capture",
            FileRole::Observation => "observation",
            FileRole::Navigation => "navigation",
        }
    }
}

/// Compiled role patterns, built once per run.
#[derive(Debug, Clone)]
pub struct RolePatterns {
    archive: Regex,
    raw_capture: Regex,
    observation: Regex,
    navigation: Regex,
}

impl RolePatterns {
    pub fn compile() -> Result<Self, AppError> {
        Ok(Self {
            archive: Regex::new(FileRole::Archive.pattern())?,
            raw_capture: Regex::new(FileRole::RawCapture.pattern())?,
            observation: Regex::new(FileRole::Observation.pattern())?,
            navigation: Regex::new(FileRole::Navigation.pattern())?,
        })
    }

    pub fn get(&self, role: FileRole) -> &Regex {
        match role {
            FileRole::Archive => &self.archive,
            FileRole::RawCapture => &self.raw_capture,
            FileRole::Observation => &self.observation,
            FileRole::Navigation => &self.navigation,
        }
    }

    /// Assign a file name its first matching role in precedence order.
    pub fn role_of(&self, file_name: &str) -> Option<FileRole> {
        FileRole::ALL.into_iter().find(|role| self.get(*role).is_match(file_name))
    }
}
