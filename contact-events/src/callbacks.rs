//! Per-phase contact callbacks.

use std::fmt;
use std::rc::Rc;

use crate::contact::{ContactPhase, ContactPoint};
use crate::event::PlatformEvent;

/// Callback invoked for one contact phase.
///
/// Receives the raw event (with the contact already attached, so it may call
/// `prevent_default`) and the normalized payload.
pub type PhaseCallback<E> = Rc<dyn Fn(&mut PlatformEvent<E>, &ContactPoint)>;

/// The set of phase callbacks a caller is interested in.
///
/// Phases left unset produce no platform subscription.
pub struct ContactCallbacks<E> {
    start: Option<PhaseCallback<E>>,
    moved: Option<PhaseCallback<E>>,
    end: Option<PhaseCallback<E>>,
    cancel: Option<PhaseCallback<E>>,
}

impl<E> Default for ContactCallbacks<E> {
    fn default() -> Self {
        Self { start: None, moved: None, end: None, cancel: None }
    }
}

impl<E> Clone for ContactCallbacks<E> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            moved: self.moved.clone(),
            end: self.end.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<E> ContactCallbacks<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start<F>(self, f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>, &ContactPoint) + 'static,
    {
        self.on(ContactPhase::Start, f)
    }

    pub fn on_move<F>(self, f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>, &ContactPoint) + 'static,
    {
        self.on(ContactPhase::Move, f)
    }

    pub fn on_end<F>(self, f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>, &ContactPoint) + 'static,
    {
        self.on(ContactPhase::End, f)
    }

    pub fn on_cancel<F>(self, f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>, &ContactPoint) + 'static,
    {
        self.on(ContactPhase::Cancel, f)
    }

    /// Sets the callback for `phase`, replacing any previous one.
    pub fn on<F>(mut self, phase: ContactPhase, f: F) -> Self
    where
        F: Fn(&mut PlatformEvent<E>, &ContactPoint) + 'static,
    {
        *self.slot_mut(phase) = Some(Rc::new(f));
        self
    }

    pub fn get(&self, phase: ContactPhase) -> Option<&PhaseCallback<E>> {
        match phase {
            ContactPhase::Start => self.start.as_ref(),
            ContactPhase::Move => self.moved.as_ref(),
            ContactPhase::End => self.end.as_ref(),
            ContactPhase::Cancel => self.cancel.as_ref(),
        }
    }

    /// Supplied phases with their callbacks, in lifecycle order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactPhase, &PhaseCallback<E>)> + '_ {
        ContactPhase::ALL
            .into_iter()
            .filter_map(move |phase| self.get(phase).map(|cb| (phase, cb)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot_mut(&mut self, phase: ContactPhase) -> &mut Option<PhaseCallback<E>> {
        match phase {
            ContactPhase::Start => &mut self.start,
            ContactPhase::Move => &mut self.moved,
            ContactPhase::End => &mut self.end,
            ContactPhase::Cancel => &mut self.cancel,
        }
    }
}

impl<E> fmt::Debug for ContactCallbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phases: Vec<ContactPhase> = self.iter().map(|(phase, _)| phase).collect();
        f.debug_struct("ContactCallbacks").field("phases", &phases).finish()
    }
}
