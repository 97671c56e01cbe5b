//! Application directories.
//!
//! Resolved through [`ProjectDirs`] with the qualifier, organization and
//! application name below. Failing to determine a directory (typically no
//! home directory) is reported as [`ConfigError::DirectoryUnavailable`].

use crate::error::{ConfigError, CoreError};
use directories_next::ProjectDirs;
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "rectangles";
const APPLICATION: &str = "rectangles";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// The per-user configuration directory, e.g. `~/.config/rectangles` on Linux.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs("Config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// The directory relative log file paths are resolved against, e.g.
/// `~/.local/share/rectangles` on Linux.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    project_dirs("State").map(|dirs| dirs.data_local_dir().to_path_buf())
}
