//! # Contact Core Library (`contact-core`)
//!
//! `contact-core` is the foundational layer of the contact toolkit. It carries the
//! pieces every other crate in the workspace leans on but that have nothing to do
//! with pointer input itself:
//!
//! - **Error Handling**: A unified error system through the [`CoreError`] enum and its
//!   associated specific error types [`ConfigError`] and [`LoggingError`].
//! - **Configuration Management**: Loading, parsing and validating the TOML
//!   configuration through [`ConfigLoader`] into a [`CoreConfig`], including the
//!   `[contact]` section consumed by `contact-events`.
//! - **Logging**: A logging setup built on top of `tracing`, configurable for
//!   console and file output in text or JSON format.
//! - **Utility Functions**: filesystem helpers (`utils::fs`) and application
//!   directory resolution (`utils::paths`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contact_core::config::ConfigLoader;
//! use contact_core::logging::init_logging;
//! use contact_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!
//!     tracing::info!(use_capture = config.contact.use_capture, "contact core initialized");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod config;
pub mod logging;
pub mod utils;

pub use error::{CoreError, ConfigError, LoggingError};
pub use config::{ConfigLoader, ContactSettings, CoreConfig, InputMode, LoggingConfig};
pub use logging::{init_logging, init_minimal_logging};
pub use utils::ensure_dir_exists;
