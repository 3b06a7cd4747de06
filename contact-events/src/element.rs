//! Platform element abstraction.
//!
//! An [`Element`] is any addressable UI node. Elements expose listener
//! registration through one of two APIs: the standard
//! add/remove-listener pair with a capture flag ([`StandardEvents`]), or the
//! older attach/detach pair keyed by `on`-prefixed names with no capture
//! phase ([`LegacyEvents`]). Which one is available is discovered per element.

use std::fmt;
use std::rc::Rc;

use crate::errors::PlatformError;
use crate::event::PlatformEvent;

/// An addressable UI node.
///
/// Equality must be node identity; the mouse-out ancestor walk relies on it.
pub trait Element: Clone + PartialEq + Sized + 'static {
    /// The node's parent, or `None` at the root.
    fn parent_node(&self) -> Option<Self>;

    fn standard_events(&self) -> Option<&dyn StandardEvents<Self>> {
        None
    }

    fn legacy_events(&self) -> Option<&dyn LegacyEvents<Self>> {
        None
    }
}

/// Listener registration with capture-phase support.
pub trait StandardEvents<E> {
    fn add_event_listener(&self, event_type: &str, handler: &Handler<E>, use_capture: bool) -> Result<(), PlatformError>;

    fn remove_event_listener(&self, event_type: &str, handler: &Handler<E>, use_capture: bool) -> Result<(), PlatformError>;
}

/// Listener registration keyed by `on`-prefixed names, bubble phase only.
pub trait LegacyEvents<E> {
    fn attach_event(&self, on_event_type: &str, handler: &Handler<E>) -> Result<(), PlatformError>;

    fn detach_event(&self, on_event_type: &str, handler: &Handler<E>) -> Result<(), PlatformError>;
}

/// A listener function subscribed on an element.
///
/// Cloning shares the underlying closure; two handlers are equal exactly when
/// they share it, which is how platforms identify a listener on removal.
pub struct Handler<E>(Rc<dyn Fn(&mut PlatformEvent<E>)>);

impl<E> Handler<E> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>) + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &mut PlatformEvent<E>) {
        (self.0)(event)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> PartialEq for Handler<E> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<E> Eq for Handler<E> {}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.addr()).finish()
    }
}
