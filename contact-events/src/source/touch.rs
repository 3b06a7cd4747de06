use crate::callbacks::PhaseCallback;
use crate::capability::PointerCapability;
use crate::contact::{ContactPhase, ContactPoint};
use crate::element::{Element, Handler};
use crate::event::{PlatformEvent, TouchPoint};

use super::{deliver, ContactSource};

/// Touch family: `touchstart`, `touchmove`, `touchend`, `touchcancel`.
///
/// Start and move are dropped while more than one finger is down. After the
/// end callback the event's default action is prevented so no mouse events
/// are synthesized from the lifted touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchSource;

fn first_touch<E>(event: &PlatformEvent<E>, phase: ContactPhase) -> Option<TouchPoint> {
    let (list, name) = match phase {
        ContactPhase::Start | ContactPhase::Move => (&event.target_touches, "target_touches"),
        ContactPhase::End | ContactPhase::Cancel => (&event.changed_touches, "changed_touches"),
    };
    let touch = list.first().copied();
    if touch.is_none() {
        tracing::warn!(event_type = %event.event_type, list = name, "touch event without touch points, dropped");
    }
    touch
}

impl<E: Element> ContactSource<E> for TouchSource {
    fn capability(&self) -> PointerCapability {
        PointerCapability::Touch
    }

    fn event_type(&self, phase: ContactPhase) -> &'static str {
        match phase {
            ContactPhase::Start => "touchstart",
            ContactPhase::Move => "touchmove",
            ContactPhase::End => "touchend",
            ContactPhase::Cancel => "touchcancel",
        }
    }

    fn adapter(&self, phase: ContactPhase, _element: &E, callback: PhaseCallback<E>) -> Handler<E> {
        Handler::new(move |event| {
            if matches!(phase, ContactPhase::Start | ContactPhase::Move) && event.touches.len() > 1 {
                tracing::trace!(touches = event.touches.len(), %phase, "multi-touch, ignoring");
                return;
            }
            let Some(touch) = first_touch(event, phase) else {
                return;
            };
            deliver(event, ContactPoint::from_cursor(&touch), &callback);
            if phase == ContactPhase::End {
                event.prevent_default();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryElement;
    use crate::source::test_support::recorder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn adapter_for(phase: ContactPhase) -> (Handler<MemoryElement>, std::rc::Rc<std::cell::RefCell<Vec<ContactPoint>>>) {
        let (callback, seen) = recorder();
        let element = MemoryElement::new("page");
        (TouchSource.adapter(phase, &element, callback), seen)
    }

    fn finger(id: i64, x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(id, x, y).with_offset(x - 100.0, y - 100.0)
    }

    #[test]
    fn test_event_types() {
        let names: Vec<&str> = ContactPhase::ALL
            .iter()
            .map(|p| ContactSource::<MemoryElement>::event_type(&TouchSource, *p))
            .collect();
        assert_eq!(names, vec!["touchstart", "touchmove", "touchend", "touchcancel"]);
    }

    #[rstest]
    #[case(ContactPhase::Start, "touchstart")]
    #[case(ContactPhase::Move, "touchmove")]
    fn test_multi_touch_is_suppressed(#[case] phase: ContactPhase, #[case] event_type: &str) {
        let (handler, seen) = adapter_for(phase);
        let mut event = PlatformEvent::new(event_type)
            .with_touches(vec![finger(1, 110.0, 120.0), finger(2, 300.0, 300.0)])
            .with_target_touches(vec![finger(1, 110.0, 120.0)]);

        handler.call(&mut event);

        assert!(seen.borrow().is_empty());
        assert!(event.contact().is_none());
    }

    #[rstest]
    #[case(ContactPhase::Start, "touchstart")]
    #[case(ContactPhase::Move, "touchmove")]
    fn test_single_touch_uses_first_target_touch(#[case] phase: ContactPhase, #[case] event_type: &str) {
        let (handler, seen) = adapter_for(phase);
        let mut event = PlatformEvent::new(event_type)
            .with_touches(vec![finger(7, 150.0, 160.0)])
            .with_target_touches(vec![finger(7, 150.0, 160.0)])
            .with_changed_touches(vec![finger(8, 999.0, 999.0)]);

        handler.call(&mut event);

        assert_eq!(*seen.borrow(), vec![ContactPoint::new(50.0, 60.0, 150.0, 160.0)]);
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_end_uses_changed_touch_and_prevents_default() {
        let (handler, seen) = adapter_for(ContactPhase::End);
        let mut event = PlatformEvent::new("touchend")
            .with_touches(vec![finger(2, 400.0, 400.0), finger(3, 500.0, 500.0)])
            .with_changed_touches(vec![finger(1, 130.0, 140.0)]);

        handler.call(&mut event);

        assert_eq!(*seen.borrow(), vec![ContactPoint::new(30.0, 40.0, 130.0, 140.0)]);
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_cancel_uses_changed_touch_without_preventing_default() {
        let (handler, seen) = adapter_for(ContactPhase::Cancel);
        let mut event = PlatformEvent::new("touchcancel").with_changed_touches(vec![finger(1, 105.0, 106.0)]);

        handler.call(&mut event);

        assert_eq!(*seen.borrow(), vec![ContactPoint::new(5.0, 6.0, 105.0, 106.0)]);
        assert!(!event.is_default_prevented());
    }

    #[rstest]
    #[case(ContactPhase::Start, "touchstart")]
    #[case(ContactPhase::End, "touchend")]
    #[case(ContactPhase::Cancel, "touchcancel")]
    fn test_empty_touch_list_is_dropped(#[case] phase: ContactPhase, #[case] event_type: &str) {
        let (handler, seen) = adapter_for(phase);
        let mut event = PlatformEvent::new(event_type);

        handler.call(&mut event);

        assert!(seen.borrow().is_empty());
        assert!(!event.is_default_prevented());
    }
}
