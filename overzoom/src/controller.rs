// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom controller: one source surface, its overlay models, and the state machine.

use core::cell::Cell;
use core::fmt;
use core::mem;
use std::rc::Rc;

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};
use overzoom_geometry::{BounceOffsets, adjusted_viewport_frame, origin_difference};
use overzoom_gesture::{
    GesturePhase, Gestures, LongPressGesture, PanGesture, PanTracker, PinchGesture, TapGesture,
};
use tracing::{debug, warn};

use crate::action::{Action, TapTarget};
use crate::animation::{
    Animation, AnimationEvent, AnimationTarget, Animator, Change, Completion, CompletionAction,
    ScheduledAnimation, Scheduling, Ticket, ViewportPose,
};
use crate::bounce;
use crate::delegate::{ContentState, ZoomDelegate};
use crate::settings::{DEFAULT_MAXIMUM_ZOOM_SCALE, Settings};
use crate::state::{State, StateKind};
use crate::surface::{
    Backdrop, Bitmap, Container, ImageSource, Layer, LayerStack, OverlaySurface, SurfaceId,
    ViewId, ViewportSurface, Zoomable,
};

/// Everything a state may read or mutate while handling an event.
pub(crate) struct Context<S: Zoomable> {
    pub(crate) settings: Settings,
    pub(crate) source: S,
    pub(crate) container: Rc<dyn Container>,
    contrast: Box<dyn ImageSource<Image = S::Image>>,
    pub(crate) delegate: Option<Rc<dyn ZoomDelegate>>,
    pub(crate) image: Option<S::Image>,
    pub(crate) contrast_image: Option<S::Image>,
    minimum_zoom_scale: Cell<Option<f64>>,
    pub(crate) initial_absolute_frame: Option<Rect>,
    pub(crate) current_bounce_offsets: Option<BounceOffsets>,
    pub(crate) overlay: OverlaySurface<S::Image>,
    pub(crate) viewport: ViewportSurface<S::Image>,
    pub(crate) backdrop: Backdrop,
    pub(crate) layers: LayerStack,
    original_interaction: bool,
    pan: PanTracker,
    next_ticket: u64,
    scheduled: Vec<ScheduledAnimation>,
    ready: Vec<Completion>,
}

impl<S: Zoomable> Context<S> {
    pub(crate) fn surface_id(&self) -> SurfaceId {
        self.source.surface_id()
    }

    pub(crate) fn image_size(&self) -> Option<Size> {
        self.image.as_ref().map(Bitmap::size)
    }

    /// Capture the source and contrast images and everything derived from them.
    pub(crate) fn setup_image(&mut self) {
        let image = self.source.image();
        if image.is_none() && self.settings.should_log_warnings_and_errors {
            warn!(
                surface = ?self.surface_id(),
                "source surface has no image; zoom behavior is likely to be affected"
            );
        }
        self.contrast_image = self.contrast.image();
        match image {
            Some(image) => self.set_image(image),
            None => {
                self.image = None;
                self.initial_absolute_frame = None;
            }
        }
    }

    fn set_image(&mut self, image: S::Image) {
        let size = image.size();
        self.image = Some(image);
        self.minimum_zoom_scale.set(Some(self.needed_minimum_zoom_scale()));
        let frame = self.absolute_frame_of_source();
        self.initial_absolute_frame = Some(frame);
        debug!(surface = ?self.surface_id(), ?size, ?frame, "captured source image");
    }

    /// Source frame in container coordinates, through every ancestor transform.
    pub(crate) fn absolute_frame_of_source(&self) -> Rect {
        self.source.ancestry().convert_rect(self.source.frame())
    }

    fn source_to_container(&self) -> Affine {
        self.source.ancestry().to_container() * Affine::translate(self.source.frame().origin().to_vec2())
    }

    /// Convert a container point into the source surface's own space.
    pub(crate) fn container_to_source(&self, point: Point) -> Point {
        self.source_to_container().inverse() * point
    }

    /// Offset of `location` (source space) from the source surface's center.
    pub(crate) fn scale_center(&self, location: Point) -> Vec2 {
        location - self.source.bounds().center()
    }

    pub(crate) fn minimum_zoom_scale(&self) -> f64 {
        if let Some(scale) = self.minimum_zoom_scale.get() {
            return scale;
        }
        let scale = self.needed_minimum_zoom_scale();
        self.minimum_zoom_scale.set(Some(scale));
        scale
    }

    pub(crate) fn needed_minimum_zoom_scale(&self) -> f64 {
        let initial = self.zoom_scale_of(self.source.frame());
        match self.settings.minimum_zoom_scale {
            Some(minimum) if !(minimum.is_finite() && minimum > 0.0) => {
                if self.settings.should_log_warnings_and_errors {
                    warn!(
                        minimum,
                        initial,
                        "minimum zoom scale is not a positive finite number and will be ignored"
                    );
                }
                initial
            }
            Some(minimum) if minimum > initial => {
                if self.settings.should_log_warnings_and_errors {
                    warn!(
                        minimum,
                        initial,
                        "minimum zoom scale exceeds the initial zoom scale and will be ignored"
                    );
                }
                initial
            }
            Some(minimum) => minimum,
            None => initial,
        }
    }

    /// The configured maximum, or the default one when it is not a positive finite number.
    pub(crate) fn maximum_zoom_scale(&self) -> f64 {
        let maximum = self.settings.maximum_zoom_scale;
        if maximum.is_finite() && maximum > 0.0 {
            maximum
        } else {
            DEFAULT_MAXIMUM_ZOOM_SCALE
        }
    }

    /// Image scale at which the current image fills `frame`'s width.
    pub(crate) fn zoom_scale_of(&self, frame: Rect) -> f64 {
        match self.image_size() {
            Some(size) if size.width > 0.0 => frame.width() / size.width,
            _ => 1.0,
        }
    }

    pub(crate) fn pinch_scale(&self, zoom_scale: f64) -> f64 {
        let minimum = self.minimum_zoom_scale();
        if minimum > 0.0 { zoom_scale / minimum } else { 1.0 }
    }

    pub(crate) fn zoom_scale(&self, pinch_scale: f64) -> f64 {
        pinch_scale * self.minimum_zoom_scale()
    }

    pub(crate) fn minimum_pinch_scale(&self) -> f64 {
        self.pinch_scale(self.minimum_zoom_scale())
    }

    pub(crate) fn maximum_pinch_scale(&self) -> f64 {
        self.pinch_scale(self.maximum_zoom_scale())
    }

    pub(crate) fn adjust(&self, pinch_scale: f64) -> f64 {
        bounce::resist(
            pinch_scale,
            self.minimum_pinch_scale(),
            self.maximum_pinch_scale(),
        )
    }

    pub(crate) fn background_alpha(&self, pinch_scale: f64) -> f64 {
        bounce::background_alpha(
            pinch_scale,
            self.minimum_pinch_scale(),
            self.settings.primary_background_color_threshold,
        )
    }

    pub(crate) fn adjusted_scroll_view_frame(&self) -> Rect {
        let Some(initial) = self.initial_absolute_frame else {
            return Rect::ZERO;
        };
        adjusted_viewport_frame(
            initial,
            self.container.size(),
            self.viewport.pannable.content_size(),
        )
    }

    pub(crate) fn content_offset_correction(&self, offset: Point) -> Vec2 {
        self.viewport.pannable.content_offset_correction(offset)
    }

    pub(crate) fn corrected(&self, offset: Point) -> Point {
        self.viewport.pannable.corrected(offset)
    }

    pub(crate) fn maximum_image_size(&self) -> Size {
        self.source.frame().size() * self.maximum_pinch_scale()
    }

    pub(crate) fn bounce_offsets(&self) -> BounceOffsets {
        self.viewport.pannable.bounce_offsets()
    }

    pub(crate) fn content_state(&self) -> ContentState {
        let content = self.viewport.pannable.content_size();
        let container = self.container.size();
        if content.width > container.width || content.height > container.height {
            ContentState::Larger
        } else {
            ContentState::Smaller
        }
    }

    /// Move the viewport to its adjusted frame without moving its content on screen.
    pub(crate) fn adjust_viewport_frame(&mut self) {
        let old = self.viewport.pannable.frame();
        let new = self.adjusted_scroll_view_frame();
        self.viewport.pannable.set_frame(new);
        self.viewport.pannable.scroll_by(origin_difference(new, old));
    }

    pub(crate) fn viewport_pose(&self) -> ViewportPose {
        ViewportPose {
            frame: self.viewport.pannable.frame(),
            zoom_scale: self.viewport.pannable.zoom_scale(),
            content_offset: self.viewport.pannable.content_offset(),
        }
    }

    /// Delegate-provided animator for `event`, else the settings' default.
    pub(crate) fn animator(&self, event: AnimationEvent) -> Rc<dyn Animator> {
        self.delegate
            .as_ref()
            .and_then(|delegate| delegate.animator(event))
            .unwrap_or_else(|| self.settings.default_animators.animator(event))
    }

    /// Request an animation for a change already committed to the models.
    pub(crate) fn animate(
        &mut self,
        event: AnimationEvent,
        target: AnimationTarget,
        change: Change,
        action: CompletionAction,
    ) -> Ticket {
        let animation = Animation {
            event,
            target,
            change,
        };
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        let completion = Completion { ticket, action };
        match self.animator(event).animate(&animation) {
            Scheduling::Immediate => self.ready.push(completion),
            Scheduling::Timed(timing) => self.scheduled.push(ScheduledAnimation {
                animation,
                timing,
                completion,
            }),
        }
        ticket
    }

    /// Recognizers the source surface carries while the behavior is attached.
    fn source_gestures(&self) -> Gestures {
        let mut gestures = Gestures::PINCH | Gestures::PAN;
        gestures.set(Gestures::TAP, self.settings.action_on_tap_image.is_some());
        gestures.set(
            Gestures::DOUBLE_TAP,
            self.settings.action_on_double_tap_image.is_some(),
        );
        gestures
    }

    pub(crate) fn attach_source(&mut self) {
        let gestures = self.source_gestures();
        self.source.set_gestures(gestures);
        self.source.set_interaction_enabled(true);
    }

    fn detach_source(&mut self) {
        self.source.set_gestures(Gestures::empty());
        self.source.set_interaction_enabled(self.original_interaction);
    }

    /// Recognizers for the backdrop and the viewport, derived from the tap actions.
    pub(crate) fn refresh_managed_gestures(&mut self) {
        let settings = &self.settings;
        self.backdrop
            .gestures
            .set(Gestures::TAP, settings.action_on_tap_background.is_some());
        self.backdrop.gestures.set(
            Gestures::DOUBLE_TAP,
            settings.action_on_double_tap_background.is_some(),
        );
        self.viewport
            .gestures
            .set(Gestures::TAP, settings.action_on_tap_overlay.is_some());
        self.viewport.gestures.set(
            Gestures::DOUBLE_TAP,
            settings.action_on_double_tap_overlay.is_some(),
        );
    }

    pub(crate) fn reset_overlay(&mut self) {
        self.layers.remove(Layer::Overlay);
        self.overlay = OverlaySurface::default();
    }

    /// Remove every managed visual and show the source surface again.
    pub(crate) fn teardown(&mut self) {
        self.source.set_alpha(1.0);
        self.reset_overlay();
        self.viewport = ViewportSurface::default();
        self.backdrop = Backdrop::default();
        self.layers.clear();
        self.current_bounce_offsets = None;
        self.refresh_managed_gestures();
    }

    pub(crate) fn notify(&self, f: impl FnOnce(&dyn ZoomDelegate)) {
        if let Some(delegate) = &self.delegate {
            f(delegate.as_ref());
        }
    }
}

/// Presents one source surface as a zoomable overlay.
///
/// The controller owns models of the overlay surface, the pannable viewport
/// and the backdrop; the host renders them and feeds gestures back in. Every
/// event is handled by the current state, which may move to another state.
pub struct ZoomController<S: Zoomable> {
    state: State,
    cx: Context<S>,
}

impl<S: Zoomable> fmt::Debug for ZoomController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("surface", &self.cx.surface_id())
            .field("state", &self.state.kind())
            .field("initial_absolute_frame", &self.cx.initial_absolute_frame)
            .field("layers", &self.cx.layers)
            .field("scheduled", &self.cx.scheduled.len())
            .finish_non_exhaustive()
    }
}

impl<S: Zoomable> ZoomController<S> {
    /// Attach zoom behavior to `source` inside `container`.
    ///
    /// `contrast` supplies the image shown while the interactive overlay is
    /// long-pressed. The source surface gets its recognizers right away.
    pub fn new(
        container: Rc<dyn Container>,
        source: S,
        contrast: Box<dyn ImageSource<Image = S::Image>>,
        settings: Settings,
    ) -> Self {
        if let Err(err) = settings.validate()
            && settings.should_log_warnings_and_errors
        {
            warn!(%err, "zoom settings are invalid");
        }
        let original_interaction = source.interaction_enabled();
        let mut cx = Context {
            settings,
            source,
            container,
            contrast,
            delegate: None,
            image: None,
            contrast_image: None,
            minimum_zoom_scale: Cell::new(None),
            initial_absolute_frame: None,
            current_bounce_offsets: None,
            overlay: OverlaySurface::default(),
            viewport: ViewportSurface::default(),
            backdrop: Backdrop::default(),
            layers: LayerStack::default(),
            original_interaction,
            pan: PanTracker::default(),
            next_ticket: 0,
            scheduled: Vec::new(),
            ready: Vec::new(),
        };
        cx.attach_source();
        cx.refresh_managed_gestures();
        Self {
            state: State::Idle,
            cx,
        }
    }

    /// Keep every managed visual below `view`.
    #[must_use]
    pub fn with_topmost(mut self, view: ViewId) -> Self {
        self.cx.layers = LayerStack::new(Some(view));
        self
    }

    /// Report lifecycle events to `delegate`.
    #[must_use]
    pub fn with_delegate(mut self, delegate: Rc<dyn ZoomDelegate>) -> Self {
        self.cx.delegate = Some(delegate);
        self
    }

    /// Replace or remove the delegate.
    pub fn set_delegate(&mut self, delegate: Option<Rc<dyn ZoomDelegate>>) {
        self.cx.delegate = delegate;
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.cx.settings
    }

    /// Replace the settings.
    ///
    /// Recognizers are refreshed right away; geometry derived from the
    /// settings is recomputed on next use.
    pub fn set_settings(&mut self, settings: Settings) {
        if let Err(err) = settings.validate()
            && settings.should_log_warnings_and_errors
        {
            warn!(%err, "zoom settings are invalid");
        }
        self.cx.settings = settings;
        self.cx.minimum_zoom_scale.set(None);
        self.cx.refresh_managed_gestures();
        if self.state.kind() == StateKind::Idle {
            self.cx.attach_source();
        }
    }

    /// Identity of the source surface.
    pub fn surface_id(&self) -> SurfaceId {
        self.cx.surface_id()
    }

    /// Which state the controller is in.
    pub fn state(&self) -> StateKind {
        self.state.kind()
    }

    /// The source surface.
    pub fn source(&self) -> &S {
        &self.cx.source
    }

    /// The container zooming takes place in.
    pub fn container(&self) -> &Rc<dyn Container> {
        &self.cx.container
    }

    /// The overlay surface model.
    pub fn overlay(&self) -> &OverlaySurface<S::Image> {
        &self.cx.overlay
    }

    /// The pannable viewport model.
    pub fn viewport(&self) -> &ViewportSurface<S::Image> {
        &self.cx.viewport
    }

    /// The backdrop model.
    pub fn backdrop(&self) -> &Backdrop {
        &self.cx.backdrop
    }

    /// Managed visuals currently attached to the container.
    pub fn layers(&self) -> &LayerStack {
        &self.cx.layers
    }

    /// The primary image captured when the overlay was last presented.
    pub fn image(&self) -> Option<&S::Image> {
        self.cx.image.as_ref()
    }

    /// The contrast image captured when the overlay was last presented.
    pub fn contrast_image(&self) -> Option<&S::Image> {
        self.cx.contrast_image.as_ref()
    }

    /// Source frame in container coordinates, captured with the image.
    pub fn initial_absolute_frame(&self) -> Option<Rect> {
        self.cx.initial_absolute_frame
    }

    /// Overscroll per edge as of the last viewport scroll.
    pub fn current_bounce_offsets(&self) -> Option<BounceOffsets> {
        self.cx.current_bounce_offsets
    }

    /// Set the viewport's safe-area insets.
    pub fn set_viewport_insets(&mut self, insets: Insets) {
        self.cx.viewport.pannable.set_insets(insets);
    }

    /// Smallest image scale the overlay may show; cached until the image or settings change.
    pub fn minimum_zoom_scale(&self) -> f64 {
        self.cx.minimum_zoom_scale()
    }

    /// The explicit minimum zoom scale if it does not exceed the natural scale, else the natural scale.
    pub fn needed_minimum_zoom_scale(&self) -> f64 {
        self.cx.needed_minimum_zoom_scale()
    }

    /// Largest image scale the overlay may show.
    ///
    /// Falls back to the default when the configured value is unusable.
    pub fn maximum_zoom_scale(&self) -> f64 {
        self.cx.maximum_zoom_scale()
    }

    /// Viewport frame anchored where the source surface sat in the container.
    pub fn adjusted_scroll_view_frame(&self) -> Rect {
        self.cx.adjusted_scroll_view_frame()
    }

    /// Amount the viewport would move `offset` to bring it into its scroll bounds.
    pub fn content_offset_correction(&self, offset: Point) -> Vec2 {
        self.cx.content_offset_correction(offset)
    }

    /// `offset` after the viewport's scroll-bounds correction.
    pub fn corrected(&self, offset: Point) -> Point {
        self.cx.corrected(offset)
    }

    /// Pinch scale after elastic resistance.
    pub fn adjust(&self, pinch_scale: f64) -> f64 {
        self.cx.adjust(pinch_scale)
    }

    /// Largest size the source surface may grow to.
    pub fn maximum_image_size(&self) -> Size {
        self.cx.maximum_image_size()
    }

    /// Current overscroll of the viewport per edge.
    pub fn bounce_offsets(&self) -> BounceOffsets {
        self.cx.bounce_offsets()
    }

    /// Convert an image scale into a pinch scale.
    pub fn pinch_scale(&self, zoom_scale: f64) -> f64 {
        self.cx.pinch_scale(zoom_scale)
    }

    /// Convert a pinch scale into an image scale.
    pub fn zoom_scale(&self, pinch_scale: f64) -> f64 {
        self.cx.zoom_scale(pinch_scale)
    }

    /// Show the overlay.
    pub fn present_overlay(&mut self) {
        self.dispatch(|state, cx| state.present_overlay(cx));
    }

    /// Return the overlay to the source surface.
    pub fn dismiss_overlay(&mut self) {
        self.dispatch(|state, cx| state.dismiss_overlay(cx));
    }

    /// Zoom the overlay to fit the container.
    pub fn zoom_to_fit(&mut self) {
        self.dispatch(|state, cx| state.zoom_to_fit(cx));
    }

    /// Zoom to the maximum scale around `origin` (container coordinates).
    pub fn zoom_in(&mut self, origin: Option<Point>) {
        self.dispatch(|state, cx| state.zoom_in(origin, cx));
    }

    /// Perform `action` as if triggered at `origin` (container coordinates).
    pub fn perform(&mut self, action: Action, origin: Option<Point>) {
        if !action.is_some() {
            return;
        }
        debug!(surface = ?self.cx.surface_id(), ?action, "performing action");
        self.dispatch(|state, cx| state.perform(action, origin, cx));
    }

    /// Tear down every managed visual and return to idle.
    ///
    /// Detaches the source surface's recognizers and restores its visibility
    /// and interactivity. Animations not yet taken are discarded; completions
    /// of animations already taken become stale.
    pub fn reset(&mut self) {
        self.cx.detach_source();
        self.cx.teardown();
        self.cx.pan.end();
        self.cx.scheduled.clear();
        self.cx.ready.clear();
        let from = mem::take(&mut self.state).kind();
        debug!(surface = ?self.cx.surface_id(), ?from, "reset zoom behavior");
    }

    /// Adopt the interaction flag `previous` captured before any behavior was attached.
    pub(crate) fn inherit_original_interaction(&mut self, previous: &Self) {
        self.cx.original_interaction = previous.cx.original_interaction;
    }

    /// Re-attach the source surface's recognizers after a [`reset`](Self::reset).
    pub fn reattach(&mut self) {
        self.cx.attach_source();
    }

    /// Handle a tap on one of the surfaces.
    pub fn handle_tap(&mut self, target: TapTarget, tap: TapGesture) {
        if !self.cx.settings.is_enabled {
            return;
        }
        let action = self.cx.settings.action_for_tap(target, tap.count);
        self.perform(action, Some(tap.location));
    }

    /// Handle a pinch on the source surface.
    pub fn did_pinch(&mut self, pinch: &PinchGesture) {
        if !self.cx.settings.is_enabled {
            return;
        }
        self.dispatch(|state, cx| state.did_pinch(pinch, cx));
    }

    /// Handle a pan on the source surface.
    pub fn did_pan(&mut self, pan: &PanGesture) {
        if !self.cx.settings.is_enabled {
            return;
        }
        let translation = self.cx.pan.update(pan);
        if pan.phase != GesturePhase::Changed {
            return;
        }
        if let Some(translation) = translation {
            self.dispatch(|state, cx| state.did_pan(translation, cx));
        }
    }

    /// Handle a long press on the interactive overlay.
    pub fn did_long_press(&mut self, press: &LongPressGesture) {
        if !self.cx.settings.is_enabled {
            return;
        }
        self.dispatch(|state, cx| state.did_long_press(press, cx));
    }

    /// The user started dragging the viewport.
    pub fn viewport_will_begin_dragging(&mut self) {
        self.dispatch(|state, cx| state.viewport_will_begin_interacting(cx));
    }

    /// The viewport scrolled to `content_offset`.
    pub fn viewport_did_scroll(&mut self, content_offset: Point) {
        self.cx.viewport.pannable.set_content_offset(content_offset);
        self.cx.current_bounce_offsets = Some(self.cx.bounce_offsets());
        self.dispatch(|state, cx| state.viewport_did_scroll(cx));
    }

    /// The user lifted their finger; the viewport settles into its bounds.
    pub fn viewport_did_end_dragging(&mut self) {
        self.cx.viewport.pannable.settle();
        self.cx.current_bounce_offsets = Some(self.cx.bounce_offsets());
        self.dispatch(|state, cx| state.viewport_did_scroll(cx));
    }

    /// The user started pinching the viewport.
    pub fn viewport_will_begin_zooming(&mut self) {
        self.dispatch(|state, cx| state.viewport_will_begin_interacting(cx));
    }

    /// The viewport zoomed to `zoom_scale` with `content_offset`.
    pub fn viewport_did_zoom(&mut self, zoom_scale: f64, content_offset: Point) {
        let pannable = &mut self.cx.viewport.pannable;
        pannable.set_zoom_scale(zoom_scale);
        pannable.set_content_offset(content_offset);
        self.cx.adjust_viewport_frame();
        self.dispatch(|state, cx| state.viewport_did_zoom(cx));
    }

    /// The viewport's pinch ended; the viewport settles into its bounds.
    pub fn viewport_did_end_zooming(&mut self) {
        self.cx.viewport.pannable.settle();
        self.dispatch(|state, cx| state.viewport_did_zoom(cx));
    }

    /// Take the timed animations requested since the last call.
    pub fn take_scheduled_animations(&mut self) -> Vec<ScheduledAnimation> {
        mem::take(&mut self.cx.scheduled)
    }

    /// Whether timed animations are waiting to be taken.
    pub fn has_scheduled_animations(&self) -> bool {
        !self.cx.scheduled.is_empty()
    }

    /// Report that the animation owning `completion` is visible.
    ///
    /// Completions for animations the current state no longer waits on are dropped.
    pub fn complete_animation(&mut self, completion: Completion) {
        self.dispatch(|state, cx| state.complete(completion, cx));
    }

    fn dispatch(&mut self, f: impl FnOnce(State, &mut Context<S>) -> State) {
        self.transition(f);
        while !self.cx.ready.is_empty() {
            for completion in mem::take(&mut self.cx.ready) {
                self.transition(|state, cx| state.complete(completion, cx));
            }
        }
    }

    fn transition(&mut self, f: impl FnOnce(State, &mut Context<S>) -> State) {
        let from = self.state.kind();
        self.state = f(mem::take(&mut self.state), &mut self.cx);
        let to = self.state.kind();
        if from != to {
            debug!(surface = ?self.cx.surface_id(), ?from, ?to, "zoom state changed");
        }
    }
}
