//! Default configuration values.
//!
//! These functions back the `serde` `default` attributes in [`super::types`].

use crate::config::{ContactSettings, InputMode, LoggingConfig};
use std::path::PathBuf;

/// Returns the default `LoggingConfig`, used when the `[logging]` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Bubble-phase subscriptions unless configured otherwise.
pub(super) fn default_use_capture() -> bool {
    false
}

/// Returns the default `ContactSettings`, used when the `[contact]` section is missing.
pub(super) fn default_contact_settings() -> ContactSettings {
    ContactSettings {
        use_capture: default_use_capture(),
        input_mode: InputMode::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_file_path(), None);
        assert_eq!(default_log_format(), "text");
        assert!(!default_use_capture());
    }

    #[test]
    fn test_default_sections_match_type_defaults() {
        assert_eq!(default_logging_config(), LoggingConfig::default());
        assert_eq!(default_contact_settings(), ContactSettings::default());
    }
}
