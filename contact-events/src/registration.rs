//! Single-listener registration facade.
//!
//! [`listen`] and [`deafen`] attach or detach one handler for one event type,
//! using whichever registration API the element exposes. The standard API wins
//! when both are present; the legacy API receives the `on`-prefixed name and
//! never sees the capture flag.

use crate::element::{Element, Handler};
use crate::errors::PlatformError;

fn legacy_name(event_type: &str) -> String {
    format!("on{}", event_type)
}

/// Registers `handler` for `event_type` on `element`.
///
/// The platform call's result is passed through. An element without any
/// registration API yields [`PlatformError::Unsupported`].
pub fn listen<E: Element>(
    element: &E,
    event_type: &str,
    handler: &Handler<E>,
    use_capture: bool,
) -> Result<(), PlatformError> {
    if let Some(api) = element.standard_events() {
        api.add_event_listener(event_type, handler, use_capture)
    } else if let Some(api) = element.legacy_events() {
        if use_capture {
            tracing::trace!(event_type, "legacy listener API has no capture phase, flag ignored");
        }
        api.attach_event(&legacy_name(event_type), handler)
    } else {
        Err(PlatformError::Unsupported { event_type: event_type.to_string() })
    }
}

/// Unregisters `handler` for `event_type` from `element`.
///
/// Best effort: failures (handler already gone, element disposed, no API at
/// all) are logged and dropped.
pub fn deafen<E: Element>(element: &E, event_type: &str, handler: &Handler<E>, use_capture: bool) {
    let result = if let Some(api) = element.standard_events() {
        api.remove_event_listener(event_type, handler, use_capture)
    } else if let Some(api) = element.legacy_events() {
        api.detach_event(&legacy_name(event_type), handler)
    } else {
        Err(PlatformError::Unsupported { event_type: event_type.to_string() })
    };

    if let Err(e) = result {
        tracing::debug!(event_type, error = %e, "ignoring listener detach failure");
    }
}
