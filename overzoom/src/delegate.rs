// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use crate::animation::{AnimationEvent, Animator};
use crate::surface::SurfaceId;

/// How the zoomed content compares to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentState {
    /// Fits inside the container.
    #[default]
    Smaller,
    /// Larger than the container in at least one dimension.
    Larger,
}

/// Observer of a zoom controller's lifecycle.
///
/// Every method has a no-op default.
pub trait ZoomDelegate {
    /// The overlay was inserted and the source surface hidden.
    fn did_begin_presenting_overlay(&self, surface: SurfaceId) {
        let _ = surface;
    }

    /// The overlay was removed and the source surface shown again.
    fn did_end_presenting_overlay(&self, surface: SurfaceId) {
        let _ = surface;
    }

    /// The overlay is about to animate back to the source surface.
    fn will_dismiss_overlay(&self, surface: SurfaceId) {
        let _ = surface;
    }

    /// The interactive content crossed the container size.
    fn content_state_did_change(&self, from: ContentState, to: ContentState) {
        let _ = (from, to);
    }

    /// Override the animator for `event`; `None` falls back to the settings.
    fn animator(&self, event: AnimationEvent) -> Option<Rc<dyn Animator>> {
        let _ = event;
        None
    }
}
