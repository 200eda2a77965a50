// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-state overlay state machine.
//!
//! Every handler consumes the current state, mutates the controller context
//! and returns the next state. Calls a state has no use for return it
//! unchanged.

mod idle;
mod interactive;
mod transitioning;

use kurbo::{Point, Vec2};
use overzoom_gesture::{GesturePhase, LongPressGesture, PinchGesture};
use tracing::trace;

use crate::action::Action;
use crate::animation::{AnimationEvent, Completion, CompletionAction};
use crate::controller::Context;
use crate::surface::Zoomable;

pub(crate) use interactive::InteractiveState;
pub(crate) use transitioning::TransitionState;

/// Which phase of the overlay lifecycle a controller is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// No overlay is shown.
    Idle,
    /// The overlay surface stands in for the source while a gesture or animation runs.
    TransitioningToOverlay,
    /// The pannable viewport is shown and handles its own gestures.
    InteractiveOverlay,
}

#[derive(Debug, Default)]
pub(crate) enum State {
    #[default]
    Idle,
    Transitioning(TransitionState),
    Interactive(InteractiveState),
}

impl State {
    pub(crate) fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Transitioning(_) => StateKind::TransitioningToOverlay,
            Self::Interactive(_) => StateKind::InteractiveOverlay,
        }
    }

    pub(crate) fn present_overlay<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Idle => match idle::enter(cx) {
                Some(transition) => transition.present(AnimationEvent::PositionCorrection, cx),
                None => Self::Idle,
            },
            Self::Transitioning(transition) => {
                transition.present(AnimationEvent::PositionCorrection, cx)
            }
            Self::Interactive(_) => self,
        }
    }

    pub(crate) fn dismiss_overlay<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Transitioning(transition) => transition.dismiss(cx),
            Self::Interactive(interactive) => interactive.dismiss(cx),
        }
    }

    pub(crate) fn zoom_to_fit<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Idle => match idle::enter(cx) {
                Some(transition) => transition.zoom_to_fit(cx),
                None => Self::Idle,
            },
            Self::Transitioning(transition) => transition.zoom_to_fit(cx),
            Self::Interactive(interactive) => interactive.zoom_to_fit(cx),
        }
    }

    pub(crate) fn zoom_in<S: Zoomable>(self, origin: Option<Point>, cx: &mut Context<S>) -> Self {
        match self {
            Self::Idle => match idle::enter(cx) {
                Some(transition) => transition.zoom_in(origin, cx),
                None => Self::Idle,
            },
            Self::Transitioning(transition) => transition.zoom_in(origin, cx),
            Self::Interactive(interactive) => interactive.zoom_in(origin, cx),
        }
    }

    pub(crate) fn perform<S: Zoomable>(
        self,
        action: Action,
        origin: Option<Point>,
        cx: &mut Context<S>,
    ) -> Self {
        match action {
            Action::None => self,
            Action::DismissOverlay => self.dismiss_overlay(cx),
            Action::ZoomToFit => self.zoom_to_fit(cx),
            Action::ZoomIn => self.zoom_in(origin, cx),
        }
    }

    pub(crate) fn did_pinch<S: Zoomable>(self, pinch: &PinchGesture, cx: &mut Context<S>) -> Self {
        match self {
            Self::Idle if pinch.phase == GesturePhase::Began => match idle::enter(cx) {
                Some(transition) => transition.did_pinch(pinch, cx),
                None => Self::Idle,
            },
            Self::Transitioning(transition) => transition.did_pinch(pinch, cx),
            _ => self,
        }
    }

    pub(crate) fn did_pan<S: Zoomable>(self, translation: Vec2, cx: &mut Context<S>) -> Self {
        match self {
            Self::Transitioning(transition) => transition.did_pan(translation, cx),
            _ => self,
        }
    }

    pub(crate) fn did_long_press<S: Zoomable>(
        self,
        press: &LongPressGesture,
        cx: &mut Context<S>,
    ) -> Self {
        match self {
            Self::Interactive(interactive) => interactive.did_long_press(press, cx),
            _ => self,
        }
    }

    pub(crate) fn viewport_will_begin_interacting<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Transitioning(transition) => transition.bypass(cx),
            _ => self,
        }
    }

    pub(crate) fn viewport_did_scroll<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Interactive(interactive) => interactive.did_scroll(cx),
            _ => self,
        }
    }

    pub(crate) fn viewport_did_zoom<S: Zoomable>(self, cx: &mut Context<S>) -> Self {
        match self {
            Self::Interactive(interactive) => interactive.did_zoom(cx),
            _ => self,
        }
    }

    pub(crate) fn complete<S: Zoomable>(self, completion: Completion, cx: &mut Context<S>) -> Self {
        let Completion { ticket, action } = completion;
        match self {
            _ if action == CompletionAction::None => self,
            Self::Transitioning(transition) if transition.awaits(ticket) => {
                transition.complete(action, cx)
            }
            state => {
                trace!(?ticket, ?action, state = ?state.kind(), "dropping stale animation completion");
                state
            }
        }
    }
}
