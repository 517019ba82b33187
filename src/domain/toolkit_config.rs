//! External toolkit configuration (`.ppk.toml`).

use serde::Deserialize;

use crate::domain::AppError;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PpkConfig {
    #[serde(default)]
    pub toolkit: ToolkitConfig,
}

/// Program names or paths of the external GNSS toolkit binaries.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ToolkitConfig {
    pub convbin: String,
    pub rnx2rtkp: String,
    pub unzip: String,
    pub pos2kml: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            convbin: "convbin".to_string(),
            rnx2rtkp: "rnx2rtkp".to_string(),
            unzip: "unzip".to_string(),
            pos2kml: "pos2kml".to_string(),
        }
    }
}

impl ToolkitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("convbin", &self.convbin),
            ("rnx2rtkp", &self.rnx2rtkp),
            ("unzip", &self.unzip),
            ("pos2kml", &self.pos2kml),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "toolkit.{} must not be empty",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PpkConfig, AppError> {
    let config: PpkConfig = toml::from_str(content)?;
    config.toolkit.validate()?;
    Ok(config)
}
