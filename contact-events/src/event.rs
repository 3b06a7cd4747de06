//! Raw platform pointer events as delivered to adapters.

use crate::contact::{ContactPoint, CursorInfo};

/// Button code of the main (usually left) mouse button.
pub const PRIMARY_BUTTON: i16 = 0;

/// A single active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub identifier: i64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl TouchPoint {
    pub fn new(identifier: i64, page_x: f64, page_y: f64) -> Self {
        Self { identifier, page_x, page_y, ..Self::default() }
    }

    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

impl CursorInfo for TouchPoint {
    fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    fn page(&self) -> (f64, f64) {
        (self.page_x, self.page_y)
    }
}

/// A raw mouse or touch event fired on an element of type `E`.
///
/// Adapters attach the normalized [`ContactPoint`] to the event before the
/// phase callback runs; the event itself is passed through untouched otherwise.
#[derive(Debug, Clone)]
pub struct PlatformEvent<E> {
    pub event_type: String,
    pub button: i16,
    /// Every touch currently on the surface.
    pub touches: Vec<TouchPoint>,
    /// Touches that started on the event's target.
    pub target_touches: Vec<TouchPoint>,
    /// Touches that changed in this event (for `touchend`, the lifted ones).
    pub changed_touches: Vec<TouchPoint>,
    /// The node the pointer moved to, for `mouseout`.
    pub related_target: Option<E>,
    /// Legacy spelling of the moved-to node, consulted when `related_target` is absent.
    pub to_element: Option<E>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    contact: Option<ContactPoint>,
    default_prevented: bool,
}

impl<E> PlatformEvent<E> {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            button: PRIMARY_BUTTON,
            touches: Vec::new(),
            target_touches: Vec::new(),
            changed_touches: Vec::new(),
            related_target: None,
            to_element: None,
            offset_x: 0.0,
            offset_y: 0.0,
            page_x: 0.0,
            page_y: 0.0,
            contact: None,
            default_prevented: false,
        }
    }

    /// A mouse event at the given offset and page coordinates.
    pub fn mouse(event_type: impl Into<String>, offset: (f64, f64), page: (f64, f64)) -> Self {
        let mut event = Self::new(event_type);
        (event.offset_x, event.offset_y) = offset;
        (event.page_x, event.page_y) = page;
        event
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    pub fn with_related_target(mut self, related_target: E) -> Self {
        self.related_target = Some(related_target);
        self
    }

    pub fn with_to_element(mut self, to_element: E) -> Self {
        self.to_element = Some(to_element);
        self
    }

    pub fn with_touches(mut self, touches: Vec<TouchPoint>) -> Self {
        self.touches = touches;
        self
    }

    pub fn with_target_touches(mut self, target_touches: Vec<TouchPoint>) -> Self {
        self.target_touches = target_touches;
        self
    }

    pub fn with_changed_touches(mut self, changed_touches: Vec<TouchPoint>) -> Self {
        self.changed_touches = changed_touches;
        self
    }

    /// The node the pointer moved to, preferring `related_target`.
    pub fn moved_to(&self) -> Option<&E> {
        self.related_target.as_ref().or(self.to_element.as_ref())
    }

    /// The payload attached by the contact normalizer, if this event went through one.
    pub fn contact(&self) -> Option<&ContactPoint> {
        self.contact.as_ref()
    }

    pub(crate) fn attach_contact(&mut self, contact: ContactPoint) {
        self.contact = Some(contact);
    }

    /// Suppresses the platform's follow-on behavior (synthesized mouse events, scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl<E> CursorInfo for PlatformEvent<E> {
    fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    fn page(&self) -> (f64, f64) {
        (self.page_x, self.page_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_is_primary_and_not_prevented() {
        let event: PlatformEvent<()> = PlatformEvent::new("mouseup");
        assert_eq!(event.button, PRIMARY_BUTTON);
        assert!(!event.is_default_prevented());
        assert!(event.contact().is_none());
    }

    #[test]
    fn test_moved_to_prefers_related_target() {
        let both: PlatformEvent<u32> = PlatformEvent::new("mouseout")
            .with_related_target(1)
            .with_to_element(2);
        let legacy_only: PlatformEvent<u32> = PlatformEvent::new("mouseout").with_to_element(2);
        let neither: PlatformEvent<u32> = PlatformEvent::new("mouseout");

        assert_eq!(both.moved_to(), Some(&1));
        assert_eq!(legacy_only.moved_to(), Some(&2));
        assert_eq!(neither.moved_to(), None);
    }

    #[test]
    fn test_mouse_event_reports_cursor_position() {
        let event: PlatformEvent<()> = PlatformEvent::mouse("mousemove", (5.0, 6.0), (50.0, 60.0));
        assert_eq!(ContactPoint::from_cursor(&event), ContactPoint::new(5.0, 6.0, 50.0, 60.0));
    }

    #[test]
    fn test_prevent_default_sticks() {
        let mut event: PlatformEvent<()> = PlatformEvent::new("touchend");
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
