//! Toolkit configuration discovery.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::toolkit_config::parse_config_content;
use crate::domain::{AppError, PpkConfig};

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV: &str = "PPK_TOOLKIT_CONFIG";

/// Configuration file looked up in the caller's working directory.
pub const CONFIG_FILE: &str = ".ppk.toml";

/// Load configuration from `explicit` (usually `$PPK_TOOLKIT_CONFIG`), else from
/// `<cwd>/.ppk.toml`, else fall back to defaults.
pub fn load_config(cwd: &Path, explicit: Option<PathBuf>) -> Result<PpkConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::file_not_found("Toolkit configuration", path));
            }
            path
        }
        None => {
            let local = cwd.join(CONFIG_FILE);
            if !local.is_file() {
                debug!("No {} found, using toolkit defaults", CONFIG_FILE);
                return Ok(PpkConfig::default());
            }
            local
        }
    };

    debug!("Loading toolkit configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
