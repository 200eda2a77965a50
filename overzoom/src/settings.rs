// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom behavior configuration.

use std::rc::Rc;
use std::time::Duration;

use overzoom_geometry::Edge;
use overzoom_gesture::TapCount;
use peniko::Color;
use thiserror::Error;

use crate::action::{Action, TapTarget};
use crate::animation::{AnimationEvent, Animator, TimedAnimator, Timing};

/// Maximum zoom scale of [`Settings::default`].
pub(crate) const DEFAULT_MAXIMUM_ZOOM_SCALE: f64 = 2.0;

/// Animators used when the delegate does not supply one.
#[derive(Clone, Debug)]
pub struct DefaultAnimators {
    /// Animator for [`AnimationEvent::OverlayDismissal`].
    pub dismissal: Rc<dyn Animator>,
    /// Animator for [`AnimationEvent::PositionCorrection`].
    pub position_correction: Rc<dyn Animator>,
    /// Animator for [`AnimationEvent::BackgroundColorChange`].
    pub background_color_change: Rc<dyn Animator>,
    /// Animator for [`AnimationEvent::Zoom`].
    pub zoom: Rc<dyn Animator>,
}

impl Default for DefaultAnimators {
    fn default() -> Self {
        Self::uniform(Rc::new(TimedAnimator::default()))
    }
}

impl DefaultAnimators {
    /// Use `animator` for every event.
    #[must_use]
    pub fn uniform(animator: Rc<dyn Animator>) -> Self {
        Self {
            dismissal: animator.clone(),
            position_correction: animator.clone(),
            background_color_change: animator.clone(),
            zoom: animator,
        }
    }

    /// The animator for `event`.
    #[must_use]
    pub fn animator(&self, event: AnimationEvent) -> Rc<dyn Animator> {
        match event {
            AnimationEvent::OverlayDismissal => self.dismissal.clone(),
            AnimationEvent::PositionCorrection => self.position_correction.clone(),
            AnimationEvent::BackgroundColorChange => self.background_color_change.clone(),
            AnimationEvent::Zoom => self.zoom.clone(),
        }
    }

    /// Returns a copy with a different dismissal animator.
    #[must_use]
    pub fn with_dismissal(mut self, animator: Rc<dyn Animator>) -> Self {
        self.dismissal = animator;
        self
    }

    /// Returns a copy with a different position-correction animator.
    #[must_use]
    pub fn with_position_correction(mut self, animator: Rc<dyn Animator>) -> Self {
        self.position_correction = animator;
        self
    }

    /// Returns a copy with a different backdrop animator.
    #[must_use]
    pub fn with_background_color_change(mut self, animator: Rc<dyn Animator>) -> Self {
        self.background_color_change = animator;
        self
    }

    /// Returns a copy with a different zoom animator.
    #[must_use]
    pub fn with_zoom(mut self, animator: Rc<dyn Animator>) -> Self {
        self.zoom = animator;
        self
    }
}

/// Configuration read by a [`ZoomController`](crate::ZoomController) and its states.
///
/// Scales named *zoom scale* are image scales (rendered size over the image's
/// natural size). Thresholds named *pinch* or *canceling* are surface scales:
/// `1.0` is the minimum zoom scale.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// A pinch that ends below this surface scale dismisses the overlay.
    pub zoom_canceling_threshold: f64,
    /// Explicit minimum image scale; ignored when above the natural scale.
    pub minimum_zoom_scale: Option<f64>,
    /// Maximum image scale.
    pub maximum_zoom_scale: f64,
    /// When `false`, gesture entry points do nothing.
    pub is_enabled: bool,
    /// Whether a dimming backdrop is shown behind the overlay.
    pub should_display_background: bool,
    /// Animators used when the delegate does not supply one.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub default_animators: DefaultAnimators,
    /// Backdrop color while the content is smaller than the container.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub primary_background_color: Color,
    /// Backdrop color once the content reaches the container in any dimension.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub secondary_background_color: Color,
    /// Surface scale at which the backdrop becomes fully opaque during a pinch.
    pub primary_background_color_threshold: f64,
    /// Overscroll distance at which the backdrop becomes fully transparent.
    pub background_alpha_dismissal_translation_threshold: f64,
    /// Whether configuration problems are reported through `tracing`.
    pub should_log_warnings_and_errors: bool,
    /// Overscroll distance that triggers the scroll-bounce actions.
    pub needed_translation_to_dismiss_overlay_on_scroll_bounce: f64,
    /// Single tap on the source surface.
    pub action_on_tap_image: Action,
    /// Double tap on the source surface.
    pub action_on_double_tap_image: Action,
    /// Single tap on the overlay.
    pub action_on_tap_overlay: Action,
    /// Double tap on the overlay.
    pub action_on_double_tap_overlay: Action,
    /// Single tap on the backdrop.
    pub action_on_tap_background: Action,
    /// Double tap on the backdrop.
    pub action_on_double_tap_background: Action,
    /// Overscroll past the top edge.
    pub action_on_scroll_bounce_top: Action,
    /// Overscroll past the left edge.
    pub action_on_scroll_bounce_left: Action,
    /// Overscroll past the bottom edge.
    pub action_on_scroll_bounce_bottom: Action,
    /// Overscroll past the right edge.
    pub action_on_scroll_bounce_right: Action,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_canceling_threshold: 1.5,
            minimum_zoom_scale: None,
            maximum_zoom_scale: DEFAULT_MAXIMUM_ZOOM_SCALE,
            is_enabled: true,
            should_display_background: false,
            default_animators: DefaultAnimators::default(),
            primary_background_color: Color::BLACK.with_alpha(0.6),
            secondary_background_color: Color::BLACK,
            primary_background_color_threshold: 2.0,
            background_alpha_dismissal_translation_threshold: 300.0,
            should_log_warnings_and_errors: true,
            needed_translation_to_dismiss_overlay_on_scroll_bounce: 80.0,
            action_on_tap_image: Action::None,
            action_on_double_tap_image: Action::None,
            action_on_tap_overlay: Action::None,
            action_on_double_tap_overlay: Action::None,
            action_on_tap_background: Action::None,
            action_on_double_tap_background: Action::None,
            action_on_scroll_bounce_top: Action::None,
            action_on_scroll_bounce_left: Action::None,
            action_on_scroll_bounce_bottom: Action::None,
            action_on_scroll_bounce_right: Action::None,
        }
    }
}

/// A settings value that cannot drive a zoom behavior.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    /// A zoom scale was zero, negative, or not finite.
    #[error("{name} must be a positive finite scale, got {value}")]
    InvalidScale {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The explicit minimum zoom scale is larger than the maximum.
    #[error("minimum zoom scale {minimum} exceeds maximum zoom scale {maximum}")]
    InvertedZoomRange {
        /// Minimum zoom scale.
        minimum: f64,
        /// Maximum zoom scale.
        maximum: f64,
    },
    /// A threshold was negative or NaN.
    #[error("{name} must be a non-negative threshold, got {value}")]
    InvalidThreshold {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl Settings {
    /// Plain defaults: no backdrop, cancel below 1.5, maximum zoom 2.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the dimming backdrop enabled.
    #[must_use]
    pub fn background_enabled() -> Self {
        Self::default().with_should_display_background(true)
    }

    /// Defaults where ending a pinch never cancels unless it shrinks below the minimum.
    #[must_use]
    pub fn no_zoom_cancelling() -> Self {
        Self::default().with_zoom_canceling_threshold(1.0)
    }

    /// Backdrop enabled, every pinch release dismisses, spring dismissal.
    #[must_use]
    pub fn insta_zoom() -> Self {
        let dismissal = TimedAnimator::new(Timing::spring(Duration::from_millis(600), 1.0));
        Self::background_enabled()
            .with_zoom_canceling_threshold(f64::INFINITY)
            .with_default_animators(DefaultAnimators::default().with_dismissal(Rc::new(dismissal)))
    }

    /// Check that the scales and thresholds describe a usable configuration.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_scale("maximum_zoom_scale", self.maximum_zoom_scale)?;
        if let Some(minimum) = self.minimum_zoom_scale {
            check_scale("minimum_zoom_scale", minimum)?;
            if minimum > self.maximum_zoom_scale {
                return Err(SettingsError::InvertedZoomRange {
                    minimum,
                    maximum: self.maximum_zoom_scale,
                });
            }
        }
        for (name, value) in [
            ("zoom_canceling_threshold", self.zoom_canceling_threshold),
            (
                "primary_background_color_threshold",
                self.primary_background_color_threshold,
            ),
            (
                "background_alpha_dismissal_translation_threshold",
                self.background_alpha_dismissal_translation_threshold,
            ),
            (
                "needed_translation_to_dismiss_overlay_on_scroll_bounce",
                self.needed_translation_to_dismiss_overlay_on_scroll_bounce,
            ),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(SettingsError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Action bound to a tap on `target`.
    #[must_use]
    pub fn action_for_tap(&self, target: TapTarget, count: TapCount) -> Action {
        match (target, count) {
            (TapTarget::Source, TapCount::Single) => self.action_on_tap_image,
            (TapTarget::Source, TapCount::Double) => self.action_on_double_tap_image,
            (TapTarget::Backdrop, TapCount::Single) => self.action_on_tap_background,
            (TapTarget::Backdrop, TapCount::Double) => self.action_on_double_tap_background,
            (TapTarget::Overlay, TapCount::Single) => self.action_on_tap_overlay,
            (TapTarget::Overlay, TapCount::Double) => self.action_on_double_tap_overlay,
        }
    }

    /// Action bound to overscrolling past `edge`.
    #[must_use]
    pub fn action_on_scroll_bounce(&self, edge: Edge) -> Action {
        match edge {
            Edge::Top => self.action_on_scroll_bounce_top,
            Edge::Left => self.action_on_scroll_bounce_left,
            Edge::Bottom => self.action_on_scroll_bounce_bottom,
            Edge::Right => self.action_on_scroll_bounce_right,
        }
    }

    /// Returns a copy with a different canceling threshold.
    #[must_use]
    pub fn with_zoom_canceling_threshold(mut self, threshold: f64) -> Self {
        self.zoom_canceling_threshold = threshold;
        self
    }

    /// Returns a copy with a different explicit minimum zoom scale.
    #[must_use]
    pub fn with_minimum_zoom_scale(mut self, scale: Option<f64>) -> Self {
        self.minimum_zoom_scale = scale;
        self
    }

    /// Returns a copy with a different maximum zoom scale.
    #[must_use]
    pub fn with_maximum_zoom_scale(mut self, scale: f64) -> Self {
        self.maximum_zoom_scale = scale;
        self
    }

    /// Returns a copy that is enabled or disabled.
    #[must_use]
    pub fn with_is_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Returns a copy with the backdrop shown or hidden.
    #[must_use]
    pub fn with_should_display_background(mut self, display: bool) -> Self {
        self.should_display_background = display;
        self
    }

    /// Returns a copy with different default animators.
    #[must_use]
    pub fn with_default_animators(mut self, animators: DefaultAnimators) -> Self {
        self.default_animators = animators;
        self
    }

    /// Returns a copy with a different primary backdrop color.
    #[must_use]
    pub fn with_primary_background_color(mut self, color: Color) -> Self {
        self.primary_background_color = color;
        self
    }

    /// Returns a copy with a different secondary backdrop color.
    #[must_use]
    pub fn with_secondary_background_color(mut self, color: Color) -> Self {
        self.secondary_background_color = color;
        self
    }

    /// Returns a copy with a different backdrop opacity threshold.
    #[must_use]
    pub fn with_primary_background_color_threshold(mut self, threshold: f64) -> Self {
        self.primary_background_color_threshold = threshold;
        self
    }

    /// Returns a copy with a different overscroll fade distance.
    #[must_use]
    pub fn with_background_alpha_dismissal_translation_threshold(mut self, threshold: f64) -> Self {
        self.background_alpha_dismissal_translation_threshold = threshold;
        self
    }

    /// Returns a copy with logging of configuration problems on or off.
    #[must_use]
    pub fn with_should_log_warnings_and_errors(mut self, log: bool) -> Self {
        self.should_log_warnings_and_errors = log;
        self
    }

    /// Returns a copy with a different scroll-bounce trigger distance.
    #[must_use]
    pub fn with_needed_translation_to_dismiss_overlay_on_scroll_bounce(
        mut self,
        translation: f64,
    ) -> Self {
        self.needed_translation_to_dismiss_overlay_on_scroll_bounce = translation;
        self
    }

    /// Returns a copy with a different action for a tap on `target`.
    #[must_use]
    pub fn with_tap_action(mut self, target: TapTarget, count: TapCount, action: Action) -> Self {
        let slot = match (target, count) {
            (TapTarget::Source, TapCount::Single) => &mut self.action_on_tap_image,
            (TapTarget::Source, TapCount::Double) => &mut self.action_on_double_tap_image,
            (TapTarget::Backdrop, TapCount::Single) => &mut self.action_on_tap_background,
            (TapTarget::Backdrop, TapCount::Double) => &mut self.action_on_double_tap_background,
            (TapTarget::Overlay, TapCount::Single) => &mut self.action_on_tap_overlay,
            (TapTarget::Overlay, TapCount::Double) => &mut self.action_on_double_tap_overlay,
        };
        *slot = action;
        self
    }

    /// Returns a copy with a different action for overscrolling past `edge`.
    #[must_use]
    pub fn with_scroll_bounce_action(mut self, edge: Edge, action: Action) -> Self {
        let slot = match edge {
            Edge::Top => &mut self.action_on_scroll_bounce_top,
            Edge::Left => &mut self.action_on_scroll_bounce_left,
            Edge::Bottom => &mut self.action_on_scroll_bounce_bottom,
            Edge::Right => &mut self.action_on_scroll_bounce_right,
        };
        *slot = action;
        self
    }
}

fn check_scale(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidScale { name, value })
    }
}
