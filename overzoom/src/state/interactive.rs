// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use overzoom_geometry::container_fitting_frame;
use overzoom_gesture::LongPressGesture;

use super::{State, TransitionState};
use crate::animation::{AnimationEvent, AnimationTarget, Change, CompletionAction};
use crate::controller::Context;
use crate::delegate::ContentState;
use crate::surface::{Bitmap, Layer, OverlaySurface, SurfaceImage, Zoomable};

/// The pannable viewport is shown; it scrolls and zooms on its own.
#[derive(Debug)]
pub(crate) struct InteractiveState {
    content_state: ContentState,
    /// Set once a scroll-bounce action fired; cleared when the overscroll ends.
    bounce_action_performed: bool,
}

impl InteractiveState {
    pub(super) fn enter<S: Zoomable>(cx: &mut Context<S>) -> State {
        if cx.layers.contains(Layer::Backdrop) && cx.backdrop.alpha != 1.0 {
            let from = cx.backdrop.alpha;
            cx.backdrop.alpha = 1.0;
            cx.animate(
                AnimationEvent::BackgroundColorChange,
                AnimationTarget::Backdrop,
                Change::Alpha { from, to: 1.0 },
                CompletionAction::None,
            );
        }
        cx.current_bounce_offsets = Some(cx.bounce_offsets());
        let mut state = Self {
            content_state: ContentState::Smaller,
            bounce_action_performed: false,
        };
        state.update_content_state(cx);
        State::Interactive(state)
    }

    /// Put the overlay back over the viewport's content and animate it home.
    pub(super) fn dismiss<S: Zoomable>(self, cx: &mut Context<S>) -> State {
        let (Some(image), Some(_)) = (cx.image.clone(), cx.initial_absolute_frame) else {
            return State::Interactive(self);
        };
        cx.overlay = OverlaySurface {
            image: Some(image),
            frame: cx.viewport.pannable.content_frame(),
            transform: Affine::IDENTITY,
            content_mode: cx.source.content_mode(),
        };
        cx.layers.insert(Layer::Overlay);
        TransitionState::default().dismiss(cx)
    }

    pub(super) fn zoom_to_fit<S: Zoomable>(mut self, cx: &mut Context<S>) -> State {
        let Some(image_size) = cx.image_size() else {
            return State::Interactive(self);
        };
        let fitting = container_fitting_frame(
            Rect::from_origin_size(Point::ZERO, image_size),
            cx.container.size(),
        );
        let zoom = fitting.width() / image_size.width;
        let anchor = cx.viewport.pannable.frame().size().to_rect().center();
        self.animate_zoom(anchor, zoom, cx);
        State::Interactive(self)
    }

    pub(super) fn zoom_in<S: Zoomable>(mut self, origin: Option<Point>, cx: &mut Context<S>) -> State {
        let frame = cx.viewport.pannable.frame();
        let anchor = origin.map_or_else(
            || frame.size().to_rect().center(),
            |point| (point - frame.origin()).to_point(),
        );
        let zoom = cx.maximum_zoom_scale();
        self.animate_zoom(anchor, zoom, cx);
        State::Interactive(self)
    }

    /// Fade the backdrop with the overscroll and fire at most one bounce action per excursion.
    pub(super) fn did_scroll<S: Zoomable>(mut self, cx: &mut Context<S>) -> State {
        let offsets = cx.bounce_offsets();
        cx.current_bounce_offsets = Some(offsets);
        if cx.layers.contains(Layer::Backdrop) {
            cx.backdrop.alpha = overscroll_alpha(
                offsets.max(),
                cx.settings.background_alpha_dismissal_translation_threshold,
            );
        }

        if offsets.is_zero() {
            self.bounce_action_performed = false;
            return State::Interactive(self);
        }
        if self.bounce_action_performed {
            return State::Interactive(self);
        }

        let needed = cx.settings.needed_translation_to_dismiss_overlay_on_scroll_bounce;
        let action = offsets
            .edges_exceeding(needed)
            .map(|edge| cx.settings.action_on_scroll_bounce(edge))
            .find(|action| action.is_some());
        match action {
            Some(action) => {
                self.bounce_action_performed = true;
                State::Interactive(self).perform(action, None, cx)
            }
            None => State::Interactive(self),
        }
    }

    pub(super) fn did_zoom<S: Zoomable>(mut self, cx: &mut Context<S>) -> State {
        cx.current_bounce_offsets = Some(cx.bounce_offsets());
        self.update_content_state(cx);
        State::Interactive(self)
    }

    /// Show the contrast image while pressed.
    pub(super) fn did_long_press<S: Zoomable>(
        self,
        press: &LongPressGesture,
        cx: &mut Context<S>,
    ) -> State {
        let (Some(image), Some(contrast)) = (cx.image.clone(), cx.contrast_image.clone()) else {
            return State::Interactive(self);
        };
        if contrast.size().is_zero_area() {
            return State::Interactive(self);
        }
        cx.viewport.content = Some(if press.is_pressed() {
            SurfaceImage::Contrast {
                size: image.size(),
                image: contrast,
            }
        } else {
            SurfaceImage::Primary(image)
        });
        State::Interactive(self)
    }

    /// Commit a zoom about `anchor` (viewport coordinates) and animate the viewport to it.
    fn animate_zoom<S: Zoomable>(&mut self, anchor: Point, zoom: f64, cx: &mut Context<S>) {
        let from = cx.viewport_pose();
        cx.viewport.pannable.zoom_about(anchor, zoom);
        cx.adjust_viewport_frame();
        cx.viewport.pannable.settle();
        let to = cx.viewport_pose();
        cx.animate(
            AnimationEvent::Zoom,
            AnimationTarget::Viewport,
            Change::Viewport { from, to },
            CompletionAction::None,
        );
        cx.current_bounce_offsets = Some(cx.bounce_offsets());
        self.update_content_state(cx);
    }

    fn update_content_state<S: Zoomable>(&mut self, cx: &mut Context<S>) {
        let now = cx.content_state();
        if now == self.content_state {
            return;
        }
        let from = self.content_state;
        self.content_state = now;
        cx.notify(|delegate| delegate.content_state_did_change(from, now));

        if cx.layers.contains(Layer::Backdrop) {
            let to = match now {
                ContentState::Smaller => cx.settings.primary_background_color,
                ContentState::Larger => cx.settings.secondary_background_color,
            };
            let from = cx.backdrop.color;
            cx.backdrop.color = to;
            cx.animate(
                AnimationEvent::BackgroundColorChange,
                AnimationTarget::Backdrop,
                Change::Color { from, to },
                CompletionAction::None,
            );
        }
    }
}

/// Backdrop alpha for an overscroll of `offset`, reaching zero at `threshold`.
fn overscroll_alpha(offset: f64, threshold: f64) -> f64 {
    if threshold > 0.0 {
        (1.0 - offset / threshold).clamp(0.0, 1.0)
    } else if offset > 0.0 {
        0.0
    } else {
        1.0
    }
}
