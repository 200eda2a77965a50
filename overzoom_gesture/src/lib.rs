// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overzoom_gesture --heading-base-level=0

//! Overzoom Gesture: the gesture vocabulary a zoom overlay consumes.
//!
//! Gesture *recognition* belongs to the host toolkit. This crate defines the
//! small set of values the overlay logic needs from recognizers, plus a
//! tracker for the one piece of per-gesture state it keeps:
//!
//! - [`GesturePhase`]: the lifecycle of a continuous gesture.
//! - [`PinchGesture`], [`PanGesture`], [`TapGesture`], [`LongPressGesture`]:
//!   event values hosts construct from their recognizers.
//! - [`Gestures`]: which recognizers a surface should carry.
//! - [`PanTracker`]: turns pan locations into a translation from the start.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use overzoom_gesture::{GesturePhase, Gestures, PinchGesture};
//!
//! let attached = Gestures::SOURCE;
//! assert!(attached.contains(Gestures::PINCH));
//!
//! let pinch = PinchGesture::new(GesturePhase::Changed, 1.8, Point::new(40.0, 30.0));
//! assert!(pinch.phase.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod events;
mod pan;
mod phase;
mod set;

pub use events::{LongPressGesture, PanGesture, PinchGesture, TapCount, TapGesture};
pub use pan::PanTracker;
pub use phase::GesturePhase;
pub use set::Gestures;
