// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture phases as reported by a host gesture recognizer.

use core::fmt;

/// Phase of a continuous gesture (pinch, pan, long press).
///
/// Hosts map their toolkit's recognizer state onto this enum. Discrete
/// gestures (taps) are delivered as a single event and do not use it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// The recognizer has not yet recognized the gesture.
    #[default]
    Possible,
    /// The gesture was just recognized.
    Began,
    /// The gesture changed since the previous event.
    Changed,
    /// The gesture finished normally.
    Ended,
    /// The gesture was interrupted by the system.
    Cancelled,
    /// The recognizer failed to recognize the gesture.
    Failed,
}

impl GesturePhase {
    /// Returns `true` for the phases after which no further events arrive.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }

    /// Returns `true` while the gesture is actively tracking touches.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Possible => "possible",
            Self::Began => "began",
            Self::Changed => "changed",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::GesturePhase;

    #[test]
    fn terminal_and_active_are_disjoint() {
        for phase in [
            GesturePhase::Possible,
            GesturePhase::Began,
            GesturePhase::Changed,
            GesturePhase::Ended,
            GesturePhase::Cancelled,
            GesturePhase::Failed,
        ] {
            assert!(!(phase.is_terminal() && phase.is_active()), "{phase} is both");
        }
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Changed.is_active());
        assert!(!GesturePhase::Possible.is_active());
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(GesturePhase::Cancelled.to_string(), "cancelled");
        assert_eq!(GesturePhase::Began.to_string(), "began");
    }
}
