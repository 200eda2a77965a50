// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture event values delivered by the host.
//!
//! Recognition itself happens in the host toolkit; these types carry only
//! what the overlay logic reads from a recognizer.

use kurbo::Point;

use crate::phase::GesturePhase;

/// A pinch gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    /// Phase of the gesture.
    pub phase: GesturePhase,
    /// Scale relative to the touch distance when the gesture began; `1.0` at begin.
    pub scale: f64,
    /// Centroid of the touches, in the coordinate space of the surface the
    /// recognizer is attached to.
    pub location: Point,
}

impl PinchGesture {
    /// Creates a pinch event.
    #[must_use]
    pub fn new(phase: GesturePhase, scale: f64, location: Point) -> Self {
        Self {
            phase,
            scale,
            location,
        }
    }

    /// The `Began` event of a pinch centered at `location`.
    #[must_use]
    pub fn began(location: Point) -> Self {
        Self::new(GesturePhase::Began, 1.0, location)
    }

    /// A `Changed` event at `scale`.
    #[must_use]
    pub fn changed(scale: f64, location: Point) -> Self {
        Self::new(GesturePhase::Changed, scale, location)
    }

    /// The `Ended` event at `scale`.
    #[must_use]
    pub fn ended(scale: f64, location: Point) -> Self {
        Self::new(GesturePhase::Ended, scale, location)
    }
}

/// A pan gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Phase of the gesture.
    pub phase: GesturePhase,
    /// Touch location in the container's coordinate space.
    pub location: Point,
}

impl PanGesture {
    /// Creates a pan event.
    #[must_use]
    pub fn new(phase: GesturePhase, location: Point) -> Self {
        Self { phase, location }
    }
}

/// Number of taps in a tap gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapCount {
    /// A single tap.
    Single,
    /// A double tap.
    Double,
}

/// A recognized tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapGesture {
    /// Single or double tap.
    pub count: TapCount,
    /// Tap location in the container's coordinate space.
    pub location: Point,
}

impl TapGesture {
    /// A single tap at `location`.
    #[must_use]
    pub fn single(location: Point) -> Self {
        Self {
            count: TapCount::Single,
            location,
        }
    }

    /// A double tap at `location`.
    #[must_use]
    pub fn double(location: Point) -> Self {
        Self {
            count: TapCount::Double,
            location,
        }
    }
}

/// A long-press gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPressGesture {
    /// Phase of the gesture.
    pub phase: GesturePhase,
}

impl LongPressGesture {
    /// Creates a long-press event.
    #[must_use]
    pub fn new(phase: GesturePhase) -> Self {
        Self { phase }
    }

    /// Returns `true` while the press is held down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.phase.is_active()
    }
}
