//! Error handling for the contact core layer.
//!
//! This module defines the error types shared across the workspace using the
//! `thiserror` crate. The main error type is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`].
//!
//! Input suppressions performed by `contact-events` (non-primary buttons,
//! multi-touch, mouse-out inside the element) are deliberately not errors and
//! never show up here.
//!
//! # Examples
//!
//! ```rust,ignore
//! use contact_core::error::{ConfigError, CoreError};
//!
//! fn check_mode(mode: &str) -> Result<(), CoreError> {
//!     if mode.is_empty() {
//!         return Err(ConfigError::ValidationError("empty input mode".to_string()).into());
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the contact toolkit.
///
/// Used as the common error type of `contact-core`, usually by wrapping one of
/// the more specific error types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operations (creating directories, reading files) that failed
    /// outside of the configuration reader.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but carries invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config/state home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The global subscriber could not be installed or the configuration was rejected.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter directive could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred while preparing a log destination.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}
