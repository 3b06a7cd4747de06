//! The normalized contact payload and the four lifecycle phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four lifecycle moments of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl ContactPhase {
    pub const ALL: [ContactPhase; 4] = [
        ContactPhase::Start,
        ContactPhase::Move,
        ContactPhase::End,
        ContactPhase::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactPhase::Start => "start",
            ContactPhase::Move => "move",
            ContactPhase::End => "end",
            ContactPhase::Cancel => "cancel",
        }
    }
}

impl fmt::Display for ContactPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that reports a pointer position: a mouse event or a single touch point.
pub trait CursorInfo {
    /// Position relative to the event target's padding edge.
    fn offset(&self) -> (f64, f64);
    /// Position relative to the whole document.
    fn page(&self) -> (f64, f64);
}

/// Position of a single pointer at the moment of an event.
///
/// Serializes with the field names `offsetX`, `offsetY`, `pageX`, `pageY`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub offset_x: f64,
    pub offset_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl ContactPoint {
    pub const fn new(offset_x: f64, offset_y: f64, page_x: f64, page_y: f64) -> Self {
        Self { offset_x, offset_y, page_x, page_y }
    }

    pub fn from_cursor<C: CursorInfo + ?Sized>(cursor: &C) -> Self {
        let (offset_x, offset_y) = cursor.offset();
        let (page_x, page_y) = cursor.page();
        Self { offset_x, offset_y, page_x, page_y }
    }
}
