// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overzoom_geometry --heading-base-level=0

//! Overzoom Geometry: frame math and a pannable viewport model for zoom overlays.
//!
//! This crate provides the pure geometry used to lift an on-screen image into
//! a zoomable overlay and back. It focuses on:
//! - Frame arithmetic: scaling about an anchor, gesture transforms, fitting a
//!   frame to its container, and comparing frames with a tolerance.
//! - Coordinate conversion from a nested surface into its container through a
//!   chain of ancestor spaces, each of which may carry a transform.
//! - A headless [`PannableViewport`] that predicts how a scroll view clamps
//!   content offsets and reports overscroll as [`BounceOffsets`].
//! - [`adjusted_viewport_frame`], which anchors a growing viewport to where the
//!   source surface sat inside its container.
//!
//! It does **not** own any view hierarchy or rendering backend. Callers are
//! expected to describe their hierarchy as a [`SpaceChain`] and to read frames
//! back out of the models to position real views.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use overzoom_geometry::{PannableViewport, adjusted_viewport_frame};
//!
//! // A 200x100 image shown flush against the left edge of a 400x800 screen.
//! let initial = Rect::new(0.0, 300.0, 200.0, 400.0);
//! let container = Size::new(400.0, 800.0);
//!
//! let mut viewport = PannableViewport::new();
//! viewport.set_content_base_size(Size::new(1_000.0, 500.0));
//! viewport.set_zoom_limits(0.2, 2.0);
//! viewport.set_zoom_scale(0.6);
//!
//! let frame = adjusted_viewport_frame(initial, container, viewport.content_size());
//! viewport.set_frame(frame);
//! assert_eq!(frame.x0, 0.0);
//!
//! // Offsets past the content are clamped the way a scroll view would.
//! let corrected = viewport.corrected(Point::new(-40.0, 10.0));
//! assert_eq!(corrected, Point::new(0.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod frame;
mod modes;
mod overscroll;
mod space;
mod viewport;

pub use frame::{
    FRAME_EPSILON, adjusted_viewport_frame, container_fitting_frame, frames_match,
    gesture_transform, origin_difference, scaled_about, transformed_frame,
};
pub use modes::ContentMode;
pub use overscroll::{BounceOffsets, Edge};
pub use space::{LocalSpace, SpaceChain};
pub use viewport::PannableViewport;
