//! In-memory element tree.
//!
//! [`MemoryElement`] is a headless [`Element`] with parent links, a listener
//! registry and synchronous dispatch. It stands in for a real UI toolkit when
//! driving contact normalization from recorded input, and it is what the test
//! suites subscribe against.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::element::{Element, Handler, LegacyEvents, StandardEvents};
use crate::errors::PlatformError;
use crate::event::PlatformEvent;

/// Which registration API a [`MemoryElement`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerApi {
    Standard,
    Legacy,
    None,
}

struct Registration {
    event_type: String,
    handler: Handler<MemoryElement>,
    use_capture: bool,
}

struct MemoryNode {
    name: String,
    api: ListenerApi,
    parent: RefCell<Option<MemoryElement>>,
    listeners: RefCell<Vec<Registration>>,
    disposed: Cell<bool>,
}

/// A shared handle to an in-memory node. Clones refer to the same node.
#[derive(Clone)]
pub struct MemoryElement(Rc<MemoryNode>);

impl MemoryElement {
    /// A node exposing the standard registration API.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_api(name, ListenerApi::Standard)
    }

    /// A node exposing only the legacy registration API.
    pub fn legacy(name: impl Into<String>) -> Self {
        Self::with_api(name, ListenerApi::Legacy)
    }

    /// A node exposing no registration API at all.
    pub fn without_listener_api(name: impl Into<String>) -> Self {
        Self::with_api(name, ListenerApi::None)
    }

    pub fn with_api(name: impl Into<String>, api: ListenerApi) -> Self {
        Self(Rc::new(MemoryNode {
            name: name.into(),
            api,
            parent: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            disposed: Cell::new(false),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn api(&self) -> ListenerApi {
        self.0.api
    }

    /// Makes `child` a child of this node, replacing any previous parent.
    ///
    /// Children hold their parent; parents do not hold children.
    pub fn append_child(&self, child: &MemoryElement) {
        *child.0.parent.borrow_mut() = Some(self.clone());
    }

    /// Creates a standard-API child node and appends it.
    pub fn create_child(&self, name: impl Into<String>) -> MemoryElement {
        let child = MemoryElement::new(name);
        self.append_child(&child);
        child
    }

    /// Marks the node disposed and drops every registered listener.
    ///
    /// Registration calls fail from now on and dispatch does nothing.
    pub fn dispose(&self) {
        self.0.disposed.set(true);
        // Handlers may hold clones of this node; release them outside the borrow.
        let released = std::mem::take(&mut *self.0.listeners.borrow_mut());
        drop(released);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.disposed.get()
    }

    /// Total number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    /// Number of listeners registered under `registered_name`; legacy
    /// registrations are stored under their `on`-prefixed name.
    pub fn listener_count_for(&self, registered_name: &str) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.event_type == registered_name)
            .count()
    }

    pub fn has_listener(&self, registered_name: &str, handler: &Handler<MemoryElement>, use_capture: bool) -> bool {
        self.0
            .listeners
            .borrow()
            .iter()
            .any(|r| r.event_type == registered_name && &r.handler == handler && r.use_capture == use_capture)
    }

    /// Names under which listeners are registered, in registration order.
    pub fn registered_event_types(&self) -> Vec<String> {
        self.0.listeners.borrow().iter().map(|r| r.event_type.clone()).collect()
    }

    /// Delivers `event` to every listener on this node registered for its type.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &mut PlatformEvent<MemoryElement>) -> usize {
        if self.is_disposed() {
            tracing::debug!(element = %self.name(), event_type = %event.event_type, "dispatch on disposed element");
            return 0;
        }

        let wanted = match self.0.api {
            ListenerApi::Legacy => format!("on{}", event.event_type),
            _ => event.event_type.clone(),
        };
        // Snapshot first: handlers may (de)register listeners while running.
        let handlers: Vec<Handler<MemoryElement>> = self
            .0
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.event_type == wanted)
            .map(|r| r.handler.clone())
            .collect();

        for handler in &handlers {
            handler.call(event);
        }
        handlers.len()
    }

    fn check_alive(&self) -> Result<(), PlatformError> {
        if self.is_disposed() {
            Err(PlatformError::ElementDisposed)
        } else {
            Ok(())
        }
    }

    fn position(&self, registered_name: &str, handler: &Handler<MemoryElement>, use_capture: bool) -> Option<usize> {
        self.0
            .listeners
            .borrow()
            .iter()
            .position(|r| r.event_type == registered_name && &r.handler == handler && r.use_capture == use_capture)
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("name", &self.0.name)
            .field("api", &self.0.api)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Element for MemoryElement {
    fn parent_node(&self) -> Option<Self> {
        self.0.parent.borrow().clone()
    }

    fn standard_events(&self) -> Option<&dyn StandardEvents<Self>> {
        match self.0.api {
            ListenerApi::Standard => Some(self),
            _ => None,
        }
    }

    fn legacy_events(&self) -> Option<&dyn LegacyEvents<Self>> {
        match self.0.api {
            ListenerApi::Legacy => Some(self),
            _ => None,
        }
    }
}

impl StandardEvents<MemoryElement> for MemoryElement {
    fn add_event_listener(&self, event_type: &str, handler: &Handler<MemoryElement>, use_capture: bool) -> Result<(), PlatformError> {
        self.check_alive()?;
        // Re-adding an identical listener is a no-op.
        if self.position(event_type, handler, use_capture).is_none() {
            self.0.listeners.borrow_mut().push(Registration {
                event_type: event_type.to_string(),
                handler: handler.clone(),
                use_capture,
            });
        }
        Ok(())
    }

    fn remove_event_listener(&self, event_type: &str, handler: &Handler<MemoryElement>, use_capture: bool) -> Result<(), PlatformError> {
        self.check_alive()?;
        if let Some(index) = self.position(event_type, handler, use_capture) {
            self.0.listeners.borrow_mut().remove(index);
        }
        Ok(())
    }
}

impl LegacyEvents<MemoryElement> for MemoryElement {
    fn attach_event(&self, on_event_type: &str, handler: &Handler<MemoryElement>) -> Result<(), PlatformError> {
        self.check_alive()?;
        self.0.listeners.borrow_mut().push(Registration {
            event_type: on_event_type.to_string(),
            handler: handler.clone(),
            use_capture: false,
        });
        Ok(())
    }

    fn detach_event(&self, on_event_type: &str, handler: &Handler<MemoryElement>) -> Result<(), PlatformError> {
        self.check_alive()?;
        match self.position(on_event_type, handler, false) {
            Some(index) => {
                self.0.listeners.borrow_mut().remove(index);
                Ok(())
            }
            None => Err(PlatformError::ListenerNotFound { event_type: on_event_type.to_string() }),
        }
    }
}
