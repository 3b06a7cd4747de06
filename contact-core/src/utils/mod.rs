//! General utilities.
//!
//! - [`fs`]: filesystem helpers returning [`crate::CoreError`].
//! - [`paths`]: application config/state directory resolution.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
