// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overzoom --heading-base-level=0

//! Overzoom: a headless pinch-to-zoom overlay for image surfaces.
//!
//! A [`ZoomController`] lifts an on-screen image out of its layout into an
//! overlay the user can pinch, pan and double-tap, then puts it back. It runs
//! a three-state machine ([`StateKind`]):
//!
//! - **Idle**: nothing is shown; the source surface carries pinch and pan
//!   recognizers.
//! - **Transitioning**: a plain overlay surface follows the pinch and pan, then
//!   animates to exactly where the pannable viewport will show the image.
//! - **Interactive**: the pannable viewport is shown and scrolls and zooms on
//!   its own, with overscroll fade and configurable bounce actions.
//!
//! The crate owns no views. The host implements [`Zoomable`] for its source
//! surface and [`Container`] for the view zooming happens in, forwards
//! gestures and viewport callbacks, and renders the [`OverlaySurface`],
//! [`ViewportSurface`] and [`Backdrop`] models listed in the controller's
//! [`LayerStack`]. Visual changes that should be animated come out as
//! [`ScheduledAnimation`]s; the host plays them and hands their
//! [`Completion`] back.
//!
//! Pinch gestures resist beyond the configured zoom range through
//! [`bounce::resist`].
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use overzoom::{
//!     Bitmap, Container, ContentMode, Gestures, ImageSource, PinchGesture, Settings, SpaceChain,
//!     StateKind, SurfaceId, ZoomController, Zoomable,
//! };
//!
//! #[derive(Clone)]
//! struct Image(Size);
//! impl Bitmap for Image {
//!     fn size(&self) -> Size { self.0 }
//! }
//!
//! struct Screen;
//! impl Container for Screen {
//!     fn size(&self) -> Size { Size::new(400.0, 800.0) }
//! }
//!
//! struct Photo { alpha: f64 }
//! impl ImageSource for Photo {
//!     type Image = Image;
//!     fn image(&self) -> Option<Image> { Some(Image(Size::new(800.0, 600.0))) }
//! }
//! impl Zoomable for Photo {
//!     fn surface_id(&self) -> SurfaceId { SurfaceId(1) }
//!     fn content_mode(&self) -> ContentMode { ContentMode::ScaleAspectFit }
//!     fn frame(&self) -> Rect { Rect::new(0.0, 200.0, 400.0, 500.0) }
//!     fn ancestry(&self) -> SpaceChain { SpaceChain::new() }
//!     fn set_alpha(&mut self, alpha: f64) { self.alpha = alpha; }
//!     fn set_gestures(&mut self, _: Gestures) {}
//!     fn interaction_enabled(&self) -> bool { true }
//!     fn set_interaction_enabled(&mut self, _: bool) {}
//! }
//!
//! struct NoContrast;
//! impl ImageSource for NoContrast {
//!     type Image = Image;
//!     fn image(&self) -> Option<Image> { None }
//! }
//!
//! let mut zoom = ZoomController::new(
//!     Rc::new(Screen),
//!     Photo { alpha: 1.0 },
//!     Box::new(NoContrast),
//!     Settings::default(),
//! );
//!
//! // A pinch on the source lifts the image into the overlay.
//! zoom.did_pinch(&PinchGesture::began(Point::new(200.0, 150.0)));
//! zoom.did_pinch(&PinchGesture::changed(2.0, Point::new(200.0, 150.0)));
//! assert_eq!(zoom.state(), StateKind::TransitioningToOverlay);
//! assert_eq!(zoom.source().alpha, 0.0);
//!
//! // Releasing above the cancel threshold animates into the interactive viewport.
//! zoom.did_pinch(&PinchGesture::ended(2.0, Point::new(200.0, 150.0)));
//! for scheduled in zoom.take_scheduled_animations() {
//!     zoom.complete_animation(scheduled.completion);
//! }
//! assert_eq!(zoom.state(), StateKind::InteractiveOverlay);
//! ```
//!
//! Logging goes through [`tracing`]; no subscriber is installed.

pub mod bounce;

mod action;
mod animation;
mod controller;
mod delegate;
mod registry;
mod settings;
mod state;
mod surface;

pub use action::{Action, TapTarget};
pub use animation::{
    Animation, AnimationEvent, AnimationTarget, Animator, Change, Completion, Curve, Instant,
    ScheduledAnimation, Scheduling, Ticket, TimedAnimator, Timing, ViewportPose,
};
pub use controller::ZoomController;
pub use delegate::{ContentState, ZoomDelegate};
pub use registry::ZoomBehaviors;
pub use settings::{DefaultAnimators, Settings, SettingsError};
pub use state::StateKind;
pub use surface::{
    Backdrop, Bitmap, Container, ImageSource, Layer, LayerStack, OverlaySurface, SurfaceId,
    SurfaceImage, ViewId, ViewportSurface, Zoomable,
};

pub use overzoom_geometry::{BounceOffsets, ContentMode, Edge, LocalSpace, SpaceChain};
pub use overzoom_gesture::{
    GesturePhase, Gestures, LongPressGesture, PanGesture, PinchGesture, TapCount, TapGesture,
};
