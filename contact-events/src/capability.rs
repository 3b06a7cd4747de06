//! Which pointer family the platform delivers.

use contact_core::InputMode;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::Element;
use crate::source::{ContactSource, MouseSource, TouchSource};

/// The pointer family contact subscriptions are built for.
///
/// Touch-capable platforms are assumed to synthesize mouse events too, so the
/// two are never subscribed at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerCapability {
    Mouse,
    Touch,
}

impl PointerCapability {
    /// Resolves the configured mode against the detected touch support.
    pub fn resolve(mode: InputMode, platform_has_touch: bool) -> Self {
        let capability = match mode {
            InputMode::Mouse => PointerCapability::Mouse,
            InputMode::Touch => PointerCapability::Touch,
            InputMode::Auto if platform_has_touch => PointerCapability::Touch,
            InputMode::Auto => PointerCapability::Mouse,
        };
        tracing::debug!(?mode, platform_has_touch, %capability, "resolved pointer capability");
        capability
    }

    pub fn is_touch(self) -> bool {
        self == PointerCapability::Touch
    }

    /// The event source implementing this capability.
    pub(crate) fn source<E: Element>(self) -> Box<dyn ContactSource<E>> {
        match self {
            PointerCapability::Mouse => Box::new(MouseSource),
            PointerCapability::Touch => Box::new(TouchSource),
        }
    }
}

impl fmt::Display for PointerCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerCapability::Mouse => f.write_str("mouse"),
            PointerCapability::Touch => f.write_str("touch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InputMode::Auto, true, PointerCapability::Touch)]
    #[case(InputMode::Auto, false, PointerCapability::Mouse)]
    #[case(InputMode::Mouse, true, PointerCapability::Mouse)]
    #[case(InputMode::Mouse, false, PointerCapability::Mouse)]
    #[case(InputMode::Touch, true, PointerCapability::Touch)]
    #[case(InputMode::Touch, false, PointerCapability::Touch)]
    fn test_resolve(#[case] mode: InputMode, #[case] has_touch: bool, #[case] expected: PointerCapability) {
        assert_eq!(PointerCapability::resolve(mode, has_touch), expected);
    }

    #[test]
    fn test_display_matches_serde_name() {
        let json = serde_json::to_string(&PointerCapability::Touch).unwrap();
        assert_eq!(json, format!("\"{}\"", PointerCapability::Touch));
    }
}
