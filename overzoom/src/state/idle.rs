// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

use super::TransitionState;
use crate::controller::Context;
use crate::surface::{Layer, OverlaySurface, Zoomable};

/// Leave idle: capture the image, hide the source and put the overlay where the source was.
///
/// Returns `None` when the source has no image to present.
pub(super) fn enter<S: Zoomable>(cx: &mut Context<S>) -> Option<TransitionState> {
    cx.setup_image();
    let initial = cx.initial_absolute_frame?;

    cx.source.set_alpha(0.0);

    if cx.settings.should_display_background {
        cx.layers.insert(Layer::Backdrop);
        cx.backdrop.color = cx.settings.primary_background_color;
        cx.backdrop.alpha = 0.0;
    }

    cx.overlay = OverlaySurface {
        image: cx.image.clone(),
        frame: initial,
        transform: Affine::IDENTITY,
        content_mode: cx.source.content_mode(),
    };
    cx.layers.insert(Layer::Overlay);

    let surface = cx.surface_id();
    cx.notify(|delegate| delegate.did_begin_presenting_overlay(surface));

    Some(TransitionState::default())
}
