// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use overzoom_geometry::{
    container_fitting_frame, frames_match, gesture_transform, origin_difference, scaled_about,
};
use overzoom_gesture::{GesturePhase, Gestures, PinchGesture};

use super::{InteractiveState, State};
use crate::animation::{AnimationEvent, AnimationTarget, Change, CompletionAction, Ticket};
use crate::controller::Context;
use crate::surface::{Bitmap, Layer, SurfaceImage, Zoomable};

/// The overlay surface stands in for the source while it is pinched, panned or animated.
#[derive(Debug)]
pub(crate) struct TransitionState {
    /// Frame the viewport is configured to mimic; captured on first use.
    from_frame: Option<Rect>,
    current_translation: Vec2,
    current_scale: f64,
    scale_center: Option<Vec2>,
    dismissing: bool,
    awaiting: Option<Ticket>,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            from_frame: None,
            current_translation: Vec2::ZERO,
            current_scale: 1.0,
            scale_center: None,
            dismissing: false,
            awaiting: None,
        }
    }
}

impl TransitionState {
    pub(super) fn awaits(&self, ticket: Ticket) -> bool {
        self.awaiting == Some(ticket)
    }

    /// Reconcile the viewport with the overlay, then swap them, animating if they differ.
    pub(super) fn present<S: Zoomable>(
        mut self,
        event: AnimationEvent,
        cx: &mut Context<S>,
    ) -> State {
        if self.dismissing {
            return State::Transitioning(self);
        }
        let Some(image_size) = cx.image_size() else {
            return State::Transitioning(self);
        };
        let from = *self
            .from_frame
            .get_or_insert_with(|| cx.overlay.visual_frame());
        let expected = configure_viewport(from, image_size, cx);

        let current = cx.overlay.visual_frame();
        if frames_match(current, expected) {
            return self.finish(cx);
        }

        cx.viewport.set_pinch_enabled(false);
        cx.viewport.content = Some(SurfaceImage::Clear(image_size));
        cx.overlay.frame = expected;
        cx.overlay.transform = Affine::IDENTITY;
        let ticket = cx.animate(
            event,
            AnimationTarget::Overlay,
            Change::Frame {
                from: current,
                to: expected,
            },
            CompletionAction::FinishPresenting,
        );
        self.awaiting = Some(ticket);
        State::Transitioning(self)
    }

    pub(super) fn zoom_to_fit<S: Zoomable>(mut self, cx: &mut Context<S>) -> State {
        if self.dismissing {
            return State::Transitioning(self);
        }
        self.from_frame = Some(container_fitting_frame(
            cx.overlay.visual_frame(),
            cx.container.size(),
        ));
        self.present(AnimationEvent::PositionCorrection, cx)
    }

    pub(super) fn zoom_in<S: Zoomable>(mut self, origin: Option<Point>, cx: &mut Context<S>) -> State {
        if self.dismissing {
            return State::Transitioning(self);
        }
        let Some(initial) = cx.initial_absolute_frame else {
            return State::Transitioning(self);
        };
        let center = origin.map_or(Vec2::ZERO, |point| {
            cx.scale_center(cx.container_to_source(point))
        });
        self.from_frame = Some(scaled_about(initial, cx.maximum_pinch_scale(), center));
        self.present(AnimationEvent::Zoom, cx)
    }

    /// Animate the overlay back onto the source surface.
    pub(super) fn dismiss<S: Zoomable>(mut self, cx: &mut Context<S>) -> State {
        if self.dismissing {
            return State::Transitioning(self);
        }
        let (Some(_), Some(initial)) = (cx.image.as_ref(), cx.initial_absolute_frame) else {
            return State::Transitioning(self);
        };

        let surface = cx.surface_id();
        cx.notify(|delegate| delegate.will_dismiss_overlay(surface));
        self.dismissing = true;
        cx.layers.remove(Layer::Viewport);

        let from = cx.overlay.visual_frame();
        cx.overlay.frame = initial;
        cx.overlay.transform = Affine::IDENTITY;
        let ticket = cx.animate(
            AnimationEvent::OverlayDismissal,
            AnimationTarget::Overlay,
            Change::Frame { from, to: initial },
            CompletionAction::FinishDismissal,
        );
        self.awaiting = Some(ticket);

        if cx.layers.contains(Layer::Backdrop) {
            let from = cx.backdrop.alpha;
            cx.backdrop.alpha = 0.0;
            cx.animate(
                AnimationEvent::BackgroundColorChange,
                AnimationTarget::Backdrop,
                Change::Alpha { from, to: 0.0 },
                CompletionAction::None,
            );
        }
        State::Transitioning(self)
    }

    pub(super) fn did_pinch<S: Zoomable>(mut self, pinch: &PinchGesture, cx: &mut Context<S>) -> State {
        if self.dismissing {
            return State::Transitioning(self);
        }
        let scale = cx.adjust(pinch.scale);
        match pinch.phase {
            GesturePhase::Possible => State::Transitioning(self),
            GesturePhase::Began => {
                self.scale_center = Some(cx.scale_center(pinch.location));
                State::Transitioning(self)
            }
            GesturePhase::Changed => {
                if cx.layers.contains(Layer::Backdrop) {
                    cx.backdrop.alpha = cx.background_alpha(scale);
                }
                self.current_scale = scale;
                self.update_overlay_transform(cx);
                State::Transitioning(self)
            }
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                if scale <= cx.minimum_pinch_scale() || scale < cx.settings.zoom_canceling_threshold
                {
                    self.dismiss(cx)
                } else {
                    self.present(AnimationEvent::PositionCorrection, cx)
                }
            }
        }
    }

    pub(super) fn did_pan<S: Zoomable>(mut self, translation: Vec2, cx: &mut Context<S>) -> State {
        if !self.dismissing {
            self.current_translation = translation;
            self.update_overlay_transform(cx);
        }
        State::Transitioning(self)
    }

    /// The user grabbed the viewport before the overlay arrived; swap right away.
    pub(super) fn bypass<S: Zoomable>(self, cx: &mut Context<S>) -> State {
        if self.dismissing || !cx.layers.contains(Layer::Viewport) {
            return State::Transitioning(self);
        }
        self.finish(cx)
    }

    pub(super) fn complete<S: Zoomable>(
        mut self,
        action: CompletionAction,
        cx: &mut Context<S>,
    ) -> State {
        self.awaiting = None;
        match action {
            CompletionAction::FinishPresenting if !self.dismissing => self.finish(cx),
            CompletionAction::FinishDismissal if self.dismissing => finish_dismissal(cx),
            _ => State::Transitioning(self),
        }
    }

    fn update_overlay_transform<S: Zoomable>(&self, cx: &mut Context<S>) {
        cx.overlay.transform =
            gesture_transform(self.current_scale, self.current_translation, self.scale_center);
    }

    /// Show the viewport with the real image and hand over to the interactive state.
    fn finish<S: Zoomable>(self, cx: &mut Context<S>) -> State {
        cx.viewport.set_pinch_enabled(true);
        cx.viewport.content = cx.image.clone().map(SurfaceImage::Primary);
        cx.viewport.content_mode = cx.source.content_mode();
        let has_contrast = cx
            .contrast_image
            .as_ref()
            .is_some_and(|image| !image.size().is_zero_area());
        cx.viewport.gestures.set(Gestures::LONG_PRESS, has_contrast);
        cx.reset_overlay();
        InteractiveState::enter(cx)
    }
}

/// Configure the viewport so its content sits exactly over `from`.
///
/// Returns the frame the content actually ends up at once the viewport's
/// own offset clamping is applied.
fn configure_viewport<S: Zoomable>(from: Rect, image_size: Size, cx: &mut Context<S>) -> Rect {
    let minimum = cx.minimum_zoom_scale();
    let maximum = cx.maximum_zoom_scale();
    let zoom = cx.zoom_scale_of(from);
    let largest = cx.maximum_image_size();
    let content = if from.width() > largest.width {
        largest
    } else {
        from.size()
    };

    cx.layers.insert(Layer::Viewport);
    let pannable = &mut cx.viewport.pannable;
    pannable.set_content_base_size(image_size);
    pannable.set_content_offset(Point::ZERO);
    pannable.set_zoom_limits(minimum, maximum);
    pannable.set_zoom_scale(zoom);
    pannable.set_content_size(content);
    let frame = cx.adjusted_scroll_view_frame();
    cx.viewport.pannable.set_frame(frame);
    cx.viewport.content_mode = cx.source.content_mode();

    // Past the maximum zoom the content is smaller than the overlay and stays centered on it.
    let overlay = cx.overlay.visual_frame();
    let zoom_difference = if cx.zoom_scale_of(overlay) <= maximum {
        Vec2::ZERO
    } else {
        Vec2::new(
            (overlay.width() - content.width) / 2.0,
            (overlay.height() - content.height) / 2.0,
        )
    };
    let needed = (origin_difference(frame, from) - zoom_difference).to_point();
    let correction = cx.content_offset_correction(needed);
    cx.viewport.pannable.set_content_offset(needed - correction);

    let size = image_size * cx.viewport.pannable.zoom_scale();
    Rect::from_origin_size(from.origin() + correction + zoom_difference, size)
}

fn finish_dismissal<S: Zoomable>(cx: &mut Context<S>) -> State {
    let surface = cx.surface_id();
    cx.teardown();
    cx.attach_source();
    cx.notify(|delegate| delegate.did_end_presenting_overlay(surface));
    State::Idle
}
