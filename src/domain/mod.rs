pub mod error;
pub mod file_role;
pub mod overrides;
pub mod run_stamp;
pub mod toolkit_config;

pub use error::AppError;
pub use file_role::{FileRole, RolePatterns};
pub use overrides::{ConfigOverrides, SolutionFormat, SolutionMode};
pub use run_stamp::{RunStamp, SOLUTION_EXTENSION};
pub use toolkit_config::{PpkConfig, ToolkitConfig};
