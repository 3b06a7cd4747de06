use crate::callbacks::PhaseCallback;
use crate::capability::PointerCapability;
use crate::contact::{ContactPhase, ContactPoint};
use crate::element::{Element, Handler};
use crate::event::PRIMARY_BUTTON;

use super::{deliver, ContactSource};

/// Mouse family: `mousedown`, `mousemove`, `mouseup`, `mouseout`.
///
/// Only the primary button starts a contact. Leaving the element for one of
/// its descendants is not a cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseSource;

/// Whether the pointer moved from `element` into its own subtree.
///
/// The walk begins at the parent of `moved_to` and climbs until it reaches
/// `element` (true) or the root (false). A `moved_to` equal to `element` itself
/// is therefore not in the subtree.
pub fn is_within_subtree<E: Element>(element: &E, moved_to: &E) -> bool {
    let mut node = moved_to.parent_node();
    while let Some(current) = node {
        if &current == element {
            return true;
        }
        node = current.parent_node();
    }
    false
}

impl<E: Element> ContactSource<E> for MouseSource {
    fn capability(&self) -> PointerCapability {
        PointerCapability::Mouse
    }

    fn event_type(&self, phase: ContactPhase) -> &'static str {
        match phase {
            ContactPhase::Start => "mousedown",
            ContactPhase::Move => "mousemove",
            ContactPhase::End => "mouseup",
            ContactPhase::Cancel => "mouseout",
        }
    }

    fn adapter(&self, phase: ContactPhase, element: &E, callback: PhaseCallback<E>) -> Handler<E> {
        match phase {
            ContactPhase::Start => Handler::new(move |event| {
                if event.button != PRIMARY_BUTTON {
                    tracing::trace!(button = event.button, "ignoring non-primary mousedown");
                    return;
                }
                let contact = ContactPoint::from_cursor(&*event);
                deliver(event, contact, &callback);
            }),
            ContactPhase::Move | ContactPhase::End => Handler::new(move |event| {
                let contact = ContactPoint::from_cursor(&*event);
                deliver(event, contact, &callback);
            }),
            ContactPhase::Cancel => {
                let element = element.clone();
                Handler::new(move |event| {
                    if let Some(moved_to) = event.moved_to() {
                        if is_within_subtree(&element, moved_to) {
                            tracing::trace!("mouseout into descendant, not a cancel");
                            return;
                        }
                    }
                    let contact = ContactPoint::from_cursor(&*event);
                    deliver(event, contact, &callback);
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PlatformEvent;
    use crate::memory::MemoryElement;
    use crate::source::test_support::recorder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn adapter_for(phase: ContactPhase, element: &MemoryElement) -> (Handler<MemoryElement>, std::rc::Rc<std::cell::RefCell<Vec<ContactPoint>>>) {
        let (callback, seen) = recorder();
        (MouseSource.adapter(phase, element, callback), seen)
    }

    #[test]
    fn test_event_types() {
        let names: Vec<&str> = ContactPhase::ALL
            .iter()
            .map(|p| ContactSource::<MemoryElement>::event_type(&MouseSource, *p))
            .collect();
        assert_eq!(names, vec!["mousedown", "mousemove", "mouseup", "mouseout"]);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(2, 0)]
    fn test_start_only_for_primary_button(#[case] button: i16, #[case] expected_calls: usize) {
        let element = MemoryElement::new("page");
        let (handler, seen) = adapter_for(ContactPhase::Start, &element);

        let mut event = PlatformEvent::mouse("mousedown", (10.0, 20.0), (110.0, 220.0)).with_button(button);
        handler.call(&mut event);

        assert_eq!(seen.borrow().len(), expected_calls);
        assert_eq!(event.contact().is_some(), expected_calls == 1);
    }

    #[test]
    fn test_move_reports_offset_and_page() {
        let element = MemoryElement::new("page");
        let (handler, seen) = adapter_for(ContactPhase::Move, &element);

        handler.call(&mut PlatformEvent::mouse("mousemove", (1.5, 2.5), (101.5, 202.5)));

        assert_eq!(*seen.borrow(), vec![ContactPoint::new(1.5, 2.5, 101.5, 202.5)]);
    }

    #[test]
    fn test_is_within_subtree() {
        let root = MemoryElement::new("root");
        let page = root.create_child("page");
        let line = page.create_child("line");
        let word = line.create_child("word");
        let sidebar = root.create_child("sidebar");

        assert!(is_within_subtree(&page, &line));
        assert!(is_within_subtree(&page, &word));
        assert!(!is_within_subtree(&page, &sidebar));
        assert!(!is_within_subtree(&page, &root));
        assert!(!is_within_subtree(&page, &page));
    }

    #[test]
    fn test_cancel_suppressed_when_moving_into_descendant() {
        let root = MemoryElement::new("root");
        let page = root.create_child("page");
        let word = page.create_child("line").create_child("word");
        let (handler, seen) = adapter_for(ContactPhase::Cancel, &page);

        handler.call(&mut PlatformEvent::mouse("mouseout", (0.0, 0.0), (0.0, 0.0)).with_related_target(word));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_cancel_fires_when_leaving_subtree() {
        let root = MemoryElement::new("root");
        let page = root.create_child("page");
        let sidebar = root.create_child("sidebar");
        let (handler, seen) = adapter_for(ContactPhase::Cancel, &page);

        handler.call(&mut PlatformEvent::mouse("mouseout", (4.0, 4.0), (9.0, 9.0)).with_related_target(sidebar));
        handler.call(&mut PlatformEvent::mouse("mouseout", (5.0, 5.0), (10.0, 10.0)));

        assert_eq!(
            *seen.borrow(),
            vec![ContactPoint::new(4.0, 4.0, 9.0, 9.0), ContactPoint::new(5.0, 5.0, 10.0, 10.0)]
        );
    }

    #[test]
    fn test_cancel_consults_legacy_to_element() {
        let page = MemoryElement::new("page");
        let child = page.create_child("child");
        let (handler, seen) = adapter_for(ContactPhase::Cancel, &page);

        handler.call(&mut PlatformEvent::mouse("mouseout", (0.0, 0.0), (0.0, 0.0)).with_to_element(child));
        assert!(seen.borrow().is_empty());
    }
}
