// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Something a tap or an overscroll can trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Do nothing. Recognizers bound to this action are not attached.
    #[default]
    None,
    /// Dismiss the overlay and return the image to its source surface.
    DismissOverlay,
    /// Zoom so the image fits the container.
    ZoomToFit,
    /// Zoom to the maximum scale around the trigger location.
    ZoomIn,
}

impl Action {
    /// Returns `true` for every action except [`Action::None`].
    #[must_use]
    pub fn is_some(self) -> bool {
        self != Self::None
    }
}

/// Surface a tap landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapTarget {
    /// The source image surface.
    Source,
    /// The dimming backdrop behind the overlay.
    Backdrop,
    /// The interactive overlay (the pannable viewport's image).
    Overlay,
}
