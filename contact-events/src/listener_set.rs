//! Record of the subscriptions one contact registration created.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::element::Handler;

/// Event type to handler mapping returned by contact registration.
///
/// Every entry is one live platform subscription. The set is consumed by
/// teardown, so it cannot be detached twice.
#[must_use = "dropping a ListenerSet leaks its subscriptions; pass it to deafen_for_contact"]
pub struct ListenerSet<E> {
    handlers: BTreeMap<&'static str, Handler<E>>,
    use_capture: bool,
}

impl<E> ListenerSet<E> {
    pub(crate) fn new(use_capture: bool) -> Self {
        Self { handlers: BTreeMap::new(), use_capture }
    }

    pub(crate) fn insert(&mut self, event_type: &'static str, handler: Handler<E>) {
        self.handlers.insert(event_type, handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.handlers.contains_key(event_type)
    }

    /// Subscribed event types, sorted.
    pub fn event_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn handler(&self, event_type: &str) -> Option<&Handler<E>> {
        self.handlers.get(event_type)
    }

    /// The capture flag the subscriptions were made with.
    pub fn use_capture(&self) -> bool {
        self.use_capture
    }
}

impl<E> IntoIterator for ListenerSet<E> {
    type Item = (&'static str, Handler<E>);
    type IntoIter = btree_map::IntoIter<&'static str, Handler<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.into_iter()
    }
}

impl<E> fmt::Debug for ListenerSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("event_types", &self.handlers.keys().collect::<Vec<_>>())
            .field("use_capture", &self.use_capture)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_not_impl_any;

    assert_not_impl_any!(ListenerSet<()>: Send, Sync, Clone);

    #[test]
    fn test_introspection() {
        let first: Handler<()> = Handler::new(|_| {});
        let mut set = ListenerSet::new(true);
        assert!(set.is_empty());

        set.insert("mouseup", Handler::new(|_| {}));
        set.insert("mousedown", first.clone());

        assert_eq!(set.len(), 2);
        assert!(set.use_capture());
        assert!(set.contains("mousedown"));
        assert!(!set.contains("mousemove"));
        assert_eq!(set.handler("mousedown"), Some(&first));
        assert_eq!(set.event_types().collect::<Vec<_>>(), vec!["mousedown", "mouseup"]);
    }

    #[test]
    fn test_into_iter_consumes_every_entry() {
        let mut set: ListenerSet<()> = ListenerSet::new(false);
        set.insert("touchstart", Handler::new(|_| {}));
        set.insert("touchend", Handler::new(|_| {}));

        let drained: Vec<&str> = set.into_iter().map(|(name, _)| name).collect();
        assert_eq!(drained, vec!["touchend", "touchstart"]);
    }
}
