//! # Contact Events (`contact-events`)
//!
//! Normalizes mouse and touch input on a UI element into one contact
//! lifecycle: **start**, **move**, **end** and **cancel**. Each phase callback
//! receives the raw event plus a [`ContactPoint`] with element-relative and
//! page coordinates, regardless of which pointer family produced it.
//!
//! - [`listen`] / [`deafen`]: attach or detach a single handler through
//!   whichever registration API the element exposes.
//! - [`listen_for_contact`] / [`deafen_for_contact`]: subscribe the supplied
//!   phase callbacks and tear them down again via the returned [`ListenerSet`].
//! - [`ContactNormalizer`]: the same, configured once from
//!   [`contact_core::ContactSettings`].
//! - [`MemoryElement`]: an in-memory element tree for headless hosts and tests.
//!
//! ## Usage
//!
//! ```
//! use contact_events::{
//!     deafen_for_contact, listen_for_contact, ContactCallbacks, ContactOptions, MemoryElement,
//!     PlatformEvent, PointerCapability,
//! };
//!
//! let page = MemoryElement::new("page");
//! let callbacks = ContactCallbacks::new()
//!     .on_start(|_event, contact| println!("down at {}, {}", contact.page_x, contact.page_y));
//!
//! let listeners = listen_for_contact(&page, PointerCapability::Mouse, &callbacks, ContactOptions::default());
//! page.dispatch(&mut PlatformEvent::mouse("mousedown", (4.0, 2.0), (104.0, 202.0)));
//!
//! deafen_for_contact(&page, listeners);
//! assert_eq!(page.listener_count(), 0);
//! ```

pub mod callbacks;
pub mod capability;
pub mod contact;
pub mod element;
pub mod errors;
pub mod event;
pub mod listener_set;
pub mod memory;
pub mod normalizer;
pub mod registration;
pub mod source;

pub use callbacks::{ContactCallbacks, PhaseCallback};
pub use capability::PointerCapability;
pub use contact::{ContactPhase, ContactPoint, CursorInfo};
pub use element::{Element, Handler, LegacyEvents, StandardEvents};
pub use errors::PlatformError;
pub use event::{PlatformEvent, TouchPoint, PRIMARY_BUTTON};
pub use listener_set::ListenerSet;
pub use memory::{ListenerApi, MemoryElement};
pub use normalizer::{deafen_for_contact, listen_for_contact, listen_for_contact_with, ContactNormalizer, ContactOptions};
pub use registration::{deafen, listen};
pub use source::{ContactSource, MouseSource, TouchSource};
