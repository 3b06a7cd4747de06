use thiserror::Error;

/// Failures reported by an element's listener registration API.
///
/// Only `listen` surfaces these; detaching swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("Element exposes no listener registration API (event '{event_type}')")]
    Unsupported { event_type: String },

    #[error("No listener registered for '{event_type}'")]
    ListenerNotFound { event_type: String },

    #[error("Element has been disposed")]
    ElementDisposed,
}
