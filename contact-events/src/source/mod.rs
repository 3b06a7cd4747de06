//! Pointer event sources.
//!
//! A [`ContactSource`] knows which raw event type stands for each contact
//! phase and how to turn a raw event into a [`ContactPoint`]. The normalizer
//! picks one source per subscription and never mixes families.

mod mouse;
mod touch;

pub use mouse::{is_within_subtree, MouseSource};
pub use touch::TouchSource;

use crate::callbacks::PhaseCallback;
use crate::capability::PointerCapability;
use crate::contact::{ContactPhase, ContactPoint};
use crate::element::{Element, Handler};
use crate::event::PlatformEvent;

/// Maps contact phases onto one pointer family's raw events.
pub trait ContactSource<E: Element> {
    fn capability(&self) -> PointerCapability;

    /// The raw event type subscribed for `phase`.
    fn event_type(&self, phase: ContactPhase) -> &'static str;

    /// Builds the platform handler for `phase` on `element`.
    ///
    /// The handler filters raw events, attaches the contact payload and calls
    /// `callback`.
    fn adapter(&self, phase: ContactPhase, element: &E, callback: PhaseCallback<E>) -> Handler<E>;
}

/// Attaches `contact` to `event` and runs the phase callback.
pub(crate) fn deliver<E>(event: &mut PlatformEvent<E>, contact: ContactPoint, callback: &PhaseCallback<E>) {
    event.attach_contact(contact);
    callback(event, &contact);
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::callbacks::PhaseCallback;
    use crate::contact::ContactPoint;
    use crate::event::PlatformEvent;
    use crate::memory::MemoryElement;

    /// A callback recording every payload it receives.
    pub fn recorder() -> (PhaseCallback<MemoryElement>, Rc<RefCell<Vec<ContactPoint>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback: PhaseCallback<MemoryElement> = Rc::new(move |event: &mut PlatformEvent<MemoryElement>, contact: &ContactPoint| {
            assert_eq!(event.contact(), Some(contact));
            sink.borrow_mut().push(*contact);
        });
        (callback, seen)
    }
}
