// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracker: turn a stream of pan locations into a translation.
//!
//! ## Usage
//!
//! 1) Feed every [`PanGesture`] into [`PanTracker::update`].
//! 2) `Began` records the start location; `Changed` returns the translation
//!    from that start.
//! 3) Terminal phases end tracking and return the final translation.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use overzoom_gesture::{GesturePhase, PanGesture, PanTracker};
//!
//! let mut pan = PanTracker::default();
//!
//! pan.update(&PanGesture::new(GesturePhase::Began, Point::new(10.0, 20.0)));
//! assert!(pan.is_tracking());
//!
//! let t = pan.update(&PanGesture::new(GesturePhase::Changed, Point::new(15.0, 25.0)));
//! assert_eq!(t, Some(Vec2::new(5.0, 5.0)));
//!
//! let t = pan.update(&PanGesture::new(GesturePhase::Ended, Point::new(18.0, 21.0)));
//! assert_eq!(t, Some(Vec2::new(8.0, 1.0)));
//! assert!(!pan.is_tracking());
//! ```

use kurbo::{Point, Vec2};

use crate::events::PanGesture;
use crate::phase::GesturePhase;

/// Tracks a pan gesture's start location and latest location.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Location where the pan began.
    pub start: Option<Point>,
    /// Most recent location seen while tracking.
    pub last: Option<Point>,
}

impl PanTracker {
    /// Start tracking from `location`, discarding any previous pan.
    pub fn begin(&mut self, location: Point) {
        self.start = Some(location);
        self.last = Some(location);
    }

    /// Translation from the start location to `location`, if tracking.
    #[must_use]
    pub fn translation(&self, location: Point) -> Option<Vec2> {
        self.start.map(|start| location - start)
    }

    /// Movement since the previous location, if tracking.
    pub fn step(&mut self, location: Point) -> Option<Vec2> {
        self.start?;
        let delta = self.last.map(|last| location - last);
        self.last = Some(location);
        delta
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` while a pan is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Apply a pan event and return the translation from the start location.
    ///
    /// `Possible` never produces a translation; a `Changed` event without a
    /// preceding `Began` starts tracking at its own location.
    pub fn update(&mut self, event: &PanGesture) -> Option<Vec2> {
        match event.phase {
            GesturePhase::Possible => None,
            GesturePhase::Began => {
                self.begin(event.location);
                Some(Vec2::ZERO)
            }
            GesturePhase::Changed => {
                if !self.is_tracking() {
                    self.begin(event.location);
                }
                self.last = Some(event.location);
                self.translation(event.location)
            }
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                let translation = self.translation(event.location);
                self.end();
                translation
            }
        }
    }
}
