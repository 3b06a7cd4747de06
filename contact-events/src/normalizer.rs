//! Contact subscription and teardown.
//!
//! [`listen_for_contact`] subscribes one platform listener per supplied phase
//! and returns the resulting [`ListenerSet`]; [`deafen_for_contact`] consumes
//! that set and detaches every entry. [`ContactNormalizer`] bundles the
//! capability and options for callers that configure once from
//! [`ContactSettings`].

use contact_core::ContactSettings;
use serde::{Deserialize, Serialize};

use crate::callbacks::ContactCallbacks;
use crate::capability::PointerCapability;
use crate::element::Element;
use crate::listener_set::ListenerSet;
use crate::registration::{deafen, listen};
use crate::source::ContactSource;

/// Options applied to every subscription of one contact registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactOptions {
    /// Subscribe during the capture phase where the platform supports it.
    pub use_capture: bool,
}

impl ContactOptions {
    pub fn with_capture(mut self, use_capture: bool) -> Self {
        self.use_capture = use_capture;
        self
    }
}

impl From<&ContactSettings> for ContactOptions {
    fn from(settings: &ContactSettings) -> Self {
        Self { use_capture: settings.use_capture }
    }
}

/// Subscribes the supplied phase callbacks on `element` using the event family
/// selected by `capability`.
pub fn listen_for_contact<E: Element>(
    element: &E,
    capability: PointerCapability,
    callbacks: &ContactCallbacks<E>,
    options: ContactOptions,
) -> ListenerSet<E> {
    let source = capability.source::<E>();
    listen_for_contact_with(source.as_ref(), element, callbacks, options)
}

/// Like [`listen_for_contact`], with an explicit event source.
///
/// Phases without a callback get no subscription. A subscription the platform
/// rejects is logged and left out of the returned set.
pub fn listen_for_contact_with<E, S>(
    source: &S,
    element: &E,
    callbacks: &ContactCallbacks<E>,
    options: ContactOptions,
) -> ListenerSet<E>
where
    E: Element,
    S: ContactSource<E> + ?Sized,
{
    let mut listeners = ListenerSet::new(options.use_capture);

    for (phase, callback) in callbacks.iter() {
        let event_type = source.event_type(phase);
        let handler = source.adapter(phase, element, callback.clone());
        match listen(element, event_type, &handler, options.use_capture) {
            Ok(()) => listeners.insert(event_type, handler),
            Err(e) => {
                tracing::warn!(%phase, event_type, error = %e, "failed to subscribe contact phase");
            }
        }
    }

    tracing::debug!(
        capability = %source.capability(),
        subscribed = listeners.len(),
        use_capture = options.use_capture,
        "contact listeners attached"
    );
    listeners
}

/// Detaches every subscription in `listeners` from `element`.
///
/// Never fails; detach errors are swallowed by [`deafen`].
pub fn deafen_for_contact<E: Element>(element: &E, listeners: ListenerSet<E>) {
    let use_capture = listeners.use_capture();
    let count = listeners.len();
    for (event_type, handler) in listeners {
        deafen(element, event_type, &handler, use_capture);
    }
    tracing::debug!(detached = count, "contact listeners detached");
}

/// A configured contact normalizer.
///
/// Holds the resolved pointer capability and subscription options so call
/// sites only pass the element and callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactNormalizer {
    capability: PointerCapability,
    options: ContactOptions,
}

impl ContactNormalizer {
    pub fn new(capability: PointerCapability, options: ContactOptions) -> Self {
        Self { capability, options }
    }

    /// Builds a normalizer from the `[contact]` settings and the platform's
    /// detected touch support.
    pub fn from_settings(settings: &ContactSettings, platform_has_touch: bool) -> Self {
        Self::new(
            PointerCapability::resolve(settings.input_mode, platform_has_touch),
            ContactOptions::from(settings),
        )
    }

    pub fn capability(&self) -> PointerCapability {
        self.capability
    }

    pub fn options(&self) -> ContactOptions {
        self.options
    }

    pub fn listen<E: Element>(&self, element: &E, callbacks: &ContactCallbacks<E>) -> ListenerSet<E> {
        listen_for_contact(element, self.capability, callbacks, self.options)
    }

    pub fn deafen<E: Element>(&self, element: &E, listeners: ListenerSet<E>) {
        deafen_for_contact(element, listeners)
    }
}
