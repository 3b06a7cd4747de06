//! Configuration management.
//!
//! ## Submodules
//!
//! - [`types`]: the configuration schema ([`CoreConfig`], [`LoggingConfig`],
//!   [`ContactSettings`], [`InputMode`]).
//! - [`defaults`]: default values used when the file omits a section or field.
//! - [`loader`]: [`ConfigLoader`], which reads, parses and validates the file.
//!
//! ## Example file
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file_path = "contact.log"   # relative to the state directory
//! format = "json"
//!
//! [contact]
//! use_capture = false
//! input_mode = "auto"         # auto | mouse | touch
//! ```

pub mod defaults;
pub mod types;
pub mod loader;

pub use types::{ContactSettings, CoreConfig, InputMode, LoggingConfig};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_core_config_deserialize_full() {
        let toml_data = r#"
            [logging]
            level = "trace"
            file_path = "/var/log/contact.log"
            format = "json"

            [contact]
            use_capture = true
            input_mode = "touch"
        "#;
        let config: CoreConfig = toml::from_str(toml_data).expect("Failed to deserialize CoreConfig");

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.file_path, Some(PathBuf::from("/var/log/contact.log")));
        assert_eq!(config.logging.format, "json");
        assert!(config.contact.use_capture);
        assert_eq!(config.contact.input_mode, InputMode::Touch);
    }
}
