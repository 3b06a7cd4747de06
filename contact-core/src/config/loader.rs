//! Configuration loading.
//!
//! [`ConfigLoader`] locates the configuration file, deserializes it from TOML,
//! applies defaults and validates the result.
//!
//! ## Configuration File Location
//!
//! `ConfigLoader::load()` reads the file named by the `CONTACT_CONFIG`
//! environment variable when it is set, otherwise `config.toml` inside the
//! application configuration directory
//! (see [`crate::utils::paths::get_app_config_dir`]). A missing file yields the
//! default configuration.
//!
//! ## Validation
//!
//! - Log level and format are normalized to lowercase and checked.
//! - Relative log file paths are resolved against the application state
//!   directory and the parent directory of the log file is created.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs as contact_fs;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "CONTACT_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for the configuration loading functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the `CoreConfig` for the application.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no config directory can be determined.
    /// - [`ConfigError::ReadError`] for read failures other than a missing file.
    /// - [`ConfigError::ParseError`] for invalid TOML.
    /// - [`ConfigError::ValidationError`] or [`CoreError::Filesystem`] from validation.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = Self::config_path()?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load_from_path(&path)
    }

    /// Loads the configuration from `path`, using defaults if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "configuration file not found, using defaults");
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })),
        }
    }

    /// Parses and validates configuration from TOML text. Blank input yields defaults.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn config_path() -> Result<PathBuf, CoreError> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(explicit) if !explicit.is_empty() => Ok(PathBuf::from(explicit)),
            _ => Ok(get_app_config_dir()?.join(CONFIG_FILE_NAME)),
        }
    }

    /// Validates the loaded `CoreConfig` and normalizes it in place.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                config.logging.level = level_lower;
            }
            _ => {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))));
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => {
                config.logging.format = format_lower;
            }
            _ => {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))));
            }
        }

        if let Some(log_path) = &config.logging.file_path {
            let absolute_path = if log_path.is_absolute() {
                log_path.clone()
            } else {
                get_app_state_dir()?.join(log_path)
            };
            if let Some(parent_dir) = absolute_path.parent() {
                if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                    contact_fs::ensure_dir_exists(parent_dir)?;
                }
            }
            config.logging.file_path = Some(absolute_path);
        }

        Ok(())
    }
}
