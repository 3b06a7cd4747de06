//! Configuration data structures.
//!
//! These structs are populated by deserializing the TOML configuration file.
//! Missing fields take their values from [`super::defaults`] and unknown fields
//! are rejected via `#[serde(deny_unknown_fields)]`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use super::defaults;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use contact_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/contact.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/contact.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a log file. `None` disables file logging.
    /// Relative paths are resolved against the application's state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Output format, "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// How the pointer family is chosen for contact subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Follow the platform's touch capability.
    #[default]
    Auto,
    /// Always subscribe to the mouse family.
    Mouse,
    /// Always subscribe to the touch family.
    Touch,
}

/// Settings for contact normalization.
///
/// `use_capture` is forwarded verbatim to every phase subscription.
///
/// ```
/// use contact_core::config::{ContactSettings, InputMode};
///
/// let settings: ContactSettings = toml::from_str("input_mode = \"touch\"").unwrap();
/// assert!(!settings.use_capture);
/// assert_eq!(settings.input_mode, InputMode::Touch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSettings {
    #[serde(default = "defaults::default_use_capture")]
    pub use_capture: bool,
    #[serde(default)]
    pub input_mode: InputMode,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            use_capture: defaults::default_use_capture(),
            input_mode: InputMode::default(),
        }
    }
}

/// Root configuration structure.
///
/// ```
/// use contact_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [contact]
/// use_capture = true
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.logging.format, "text");
/// assert!(loaded.contact.use_capture);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_contact_settings")]
    pub contact: ContactSettings,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            contact: defaults::default_contact_settings(),
        }
    }
}
