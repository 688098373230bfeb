//! # Reveal-on-View
//!
//! One-way state machine behind every scroll-triggered entrance. The browser
//! side feeds intersection events in; once an element has been seen it stays
//! revealed for the lifetime of that mount.

use serde::Deserialize;

/// Entrance state of one mounted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unrevealed,
    /// Terminal.
    Revealed,
}

impl RevealState {
    /// Feed one intersection observation. Returns `true` only on the
    /// transition into [`RevealState::Revealed`].
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Unrevealed, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Force the reveal without an observation (observer unavailable).
    pub fn force(&mut self) -> bool {
        self.observe(true)
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Whether the viewport observer is still needed.
    pub fn wants_observation(self) -> bool {
        !self.is_revealed()
    }
}

/// Root margin (px) applied to the viewport before testing intersection.
/// Negative values wait until the element is that far inside the viewport,
/// positive values fire before it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RevealMargin(pub i32);

impl RevealMargin {
    pub const EDGE: RevealMargin = RevealMargin(0);
    pub const HEADING: RevealMargin = RevealMargin(-80);
    pub const ICON: RevealMargin = RevealMargin(-40);

    /// `rootMargin` value for `IntersectionObserver`.
    pub fn root_margin(self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for RevealMargin {
    fn default() -> Self {
        RevealMargin::EDGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intersection_reveals() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());
        assert!(!state.observe(false));
        assert!(state.wants_observation());
        assert!(state.observe(true));
        assert!(state.is_revealed());
        assert!(!state.wants_observation());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut state = RevealState::Unrevealed;
        state.observe(true);
        for intersecting in [false, true, false, false, true] {
            assert!(!state.observe(intersecting), "no second transition");
            assert_eq!(state, RevealState::Revealed);
        }
    }

    #[test]
    fn test_force_is_one_shot() {
        let mut state = RevealState::Unrevealed;
        assert!(state.force());
        assert!(!state.force());
        assert!(state.is_revealed());
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(RevealMargin::HEADING.root_margin(), "-80px");
        assert_eq!(RevealMargin::ICON.root_margin(), "-40px");
        assert_eq!(RevealMargin::default().root_margin(), "0px");
    }
}
