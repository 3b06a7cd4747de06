//! Application directory resolution.
//!
//! Resolves the per-user configuration and state directories for the toolkit
//! with `directories-next`. Both functions return
//! [`ConfigError::DirectoryUnavailable`] when no home directory can be found.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "ContactKit";
const APPLICATION: &str = "contact";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// Directory holding `config.toml`, e.g. `~/.config/contact` on Linux.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    Ok(project_dirs("App Config")?.config_dir().to_path_buf())
}

/// Directory relative log paths are resolved against.
///
/// On Linux this is `$XDG_STATE_HOME/contact` (falling back to
/// `~/.local/state/contact`). `directories-next` has no state directory
/// for other platforms, so the local data directory is used there.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    let base = BaseDirs::new().ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "App State".to_string(),
        })
    })?;

    #[cfg(target_os = "linux")]
    let state_base = match std::env::var("XDG_STATE_HOME") {
        Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
        _ => base.home_dir().join(".local/state"),
    };
    #[cfg(not(target_os = "linux"))]
    let state_base = base.data_local_dir().to_path_buf();

    Ok(state_base.join(APPLICATION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dirs_end_with_application_name() {
        // Sandboxed CI may not have a home directory; only check when resolvable.
        if let Ok(config_dir) = get_app_config_dir() {
            assert!(config_dir.to_string_lossy().contains(APPLICATION));
        }
        if let Ok(state_dir) = get_app_state_dir() {
            assert!(state_dir.is_absolute());
        }
    }
}
