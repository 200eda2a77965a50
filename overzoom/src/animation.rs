// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation requests and the capability that schedules them.
//!
//! The controller never interpolates. When it wants a visual change animated
//! it commits the final value to its surface models right away and emits an
//! [`Animation`] describing the `from`/`to` values. The [`Animator`] chosen for
//! the [`AnimationEvent`] decides whether that change is committed
//! immediately or played out over a [`Timing`].
//!
//! Timed animations wait in the controller's outbox until the host drains
//! them with `take_scheduled_animations`. Each carries a [`Completion`] token
//! that must be handed back through `complete_animation` once the change is
//! visible. Immediate animations complete as soon as the event that requested
//! them returns.

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect};
use peniko::Color;

/// What an animation is for; used to pick an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEvent {
    /// The overlay returning to the source surface's frame.
    OverlayDismissal,
    /// The overlay moving to where the pannable viewport will show the image.
    PositionCorrection,
    /// Backdrop alpha or color changes.
    BackgroundColorChange,
    /// Zoom shortcuts such as zoom-to-fit and zoom-in.
    Zoom,
}

impl AnimationEvent {
    /// Every event kind.
    pub const ALL: [Self; 4] = [
        Self::OverlayDismissal,
        Self::PositionCorrection,
        Self::BackgroundColorChange,
        Self::Zoom,
    ];
}

/// Easing of a timed animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start and end.
    EaseInOut,
    /// Critically damped at `1.0`, bouncier below.
    Spring {
        /// Damping ratio in `(0, 1]`.
        damping: f64,
    },
}

/// Duration and curve of a timed animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// How long the animation runs.
    pub duration: Duration,
    /// Easing curve.
    pub curve: Curve,
}

impl Timing {
    /// The timing used by [`DefaultAnimators`](crate::DefaultAnimators).
    pub const DEFAULT: Self = Self::ease_in_out(Duration::from_millis(200));

    /// Linear timing.
    #[must_use]
    pub const fn linear(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::Linear,
        }
    }

    /// Ease-in-out timing.
    #[must_use]
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::EaseInOut,
        }
    }

    /// Spring timing with the given damping ratio.
    #[must_use]
    pub const fn spring(duration: Duration, damping: f64) -> Self {
        Self {
            duration,
            curve: Curve::Spring { damping },
        }
    }
}

/// How an [`Animator`] wants an animation executed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scheduling {
    /// Commit without animating; the completion runs right after the current event.
    Immediate,
    /// Animate with the given timing; the host reports completion.
    Timed(Timing),
}

/// Capability that decides how an animation is executed.
///
/// Supplied per [`AnimationEvent`] by a [`ZoomDelegate`](crate::ZoomDelegate)
/// or by [`Settings::default_animators`](crate::Settings::default_animators).
pub trait Animator: fmt::Debug {
    /// Choose how to execute `animation`.
    fn animate(&self, animation: &Animation) -> Scheduling;
}

/// Animator that commits every change immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Instant;

impl Animator for Instant {
    fn animate(&self, _animation: &Animation) -> Scheduling {
        Scheduling::Immediate
    }
}

/// Animator that plays every change with one fixed [`Timing`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedAnimator {
    /// Timing applied to every animation.
    pub timing: Timing,
}

impl TimedAnimator {
    /// Creates an animator with the given timing.
    #[must_use]
    pub const fn new(timing: Timing) -> Self {
        Self { timing }
    }
}

impl Default for TimedAnimator {
    fn default() -> Self {
        Self::new(Timing::DEFAULT)
    }
}

impl Animator for TimedAnimator {
    fn animate(&self, _animation: &Animation) -> Scheduling {
        Scheduling::Timed(self.timing)
    }
}

/// Managed visual an animation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    /// The overlay surface.
    Overlay,
    /// The dimming backdrop.
    Backdrop,
    /// The pannable viewport.
    Viewport,
}

/// Zoom, offset and frame of the pannable viewport at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPose {
    /// Viewport frame in container coordinates.
    pub frame: Rect,
    /// Zoom scale.
    pub zoom_scale: f64,
    /// Content offset.
    pub content_offset: Point,
}

/// The value an animation interpolates.
#[derive(Clone, Copy, Debug)]
pub enum Change {
    /// A frame in container coordinates.
    Frame {
        /// Start frame.
        from: Rect,
        /// Final frame, already committed to the model.
        to: Rect,
    },
    /// An opacity in `[0, 1]`.
    Alpha {
        /// Start alpha.
        from: f64,
        /// Final alpha, already committed to the model.
        to: f64,
    },
    /// A fill color.
    Color {
        /// Start color.
        from: Color,
        /// Final color, already committed to the model.
        to: Color,
    },
    /// Viewport zoom and scroll position.
    Viewport {
        /// Start pose.
        from: ViewportPose,
        /// Final pose, already committed to the model.
        to: ViewportPose,
    },
}

/// One requested visual change.
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    /// Why the change happens.
    pub event: AnimationEvent,
    /// What it applies to.
    pub target: AnimationTarget,
    /// What is interpolated.
    pub change: Change,
}

/// Identifies one animation's completion.
///
/// Tickets increase monotonically per controller and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CompletionAction {
    /// Nothing waits on this animation.
    None,
    /// The overlay reached the viewport's projected frame.
    FinishPresenting,
    /// The overlay returned to the source surface.
    FinishDismissal,
}

/// Token handed back to the controller once an animation has finished.
///
/// Not `Clone`: each animation completes exactly once.
#[derive(Debug)]
pub struct Completion {
    pub(crate) ticket: Ticket,
    pub(crate) action: CompletionAction,
}

impl Completion {
    /// The ticket of the animation this token completes.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

/// A timed animation waiting for the host to play it.
#[derive(Debug)]
pub struct ScheduledAnimation {
    /// The change to play.
    pub animation: Animation,
    /// How to play it.
    pub timing: Timing,
    /// Pass to `complete_animation` when the change is visible.
    pub completion: Completion,
}
