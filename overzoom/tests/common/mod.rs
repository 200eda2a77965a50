// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small fake host shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use overzoom::{
    AnimationEvent, Animator, Bitmap, Container, ContentMode, ContentState, Gestures, ImageSource,
    Settings, SpaceChain, SurfaceId, ZoomController, ZoomDelegate, Zoomable,
};

/// Image with only a size.
#[derive(Clone, Debug, PartialEq)]
pub struct Image(pub Size);

impl Bitmap for Image {
    fn size(&self) -> Size {
        self.0
    }
}

/// Fixed-size container.
#[derive(Debug)]
pub struct Screen(pub Size);

impl Container for Screen {
    fn size(&self) -> Size {
        self.0
    }
}

/// Mutable state behind a [`Photo`] handle.
#[derive(Debug)]
pub struct PhotoModel {
    pub id: u64,
    pub frame: Rect,
    pub ancestry: SpaceChain,
    pub image: Option<Image>,
    pub alpha: f64,
    pub gestures: Gestures,
    pub interaction: bool,
}

/// Cheap handle onto a shared photo, like a host view reference.
#[derive(Clone, Debug)]
pub struct Photo(pub Rc<RefCell<PhotoModel>>);

impl Photo {
    pub fn new(id: u64, frame: Rect, image: Size) -> Self {
        Self(Rc::new(RefCell::new(PhotoModel {
            id,
            frame,
            ancestry: SpaceChain::new(),
            image: Some(Image(image)),
            alpha: 1.0,
            gestures: Gestures::empty(),
            interaction: false,
        })))
    }

    pub fn alpha(&self) -> f64 {
        self.0.borrow().alpha
    }

    pub fn gestures(&self) -> Gestures {
        self.0.borrow().gestures
    }

    pub fn interaction(&self) -> bool {
        self.0.borrow().interaction
    }
}

impl ImageSource for Photo {
    type Image = Image;

    fn image(&self) -> Option<Image> {
        self.0.borrow().image.clone()
    }
}

impl Zoomable for Photo {
    fn surface_id(&self) -> SurfaceId {
        SurfaceId(self.0.borrow().id)
    }

    fn content_mode(&self) -> ContentMode {
        ContentMode::ScaleAspectFit
    }

    fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    fn ancestry(&self) -> SpaceChain {
        self.0.borrow().ancestry.clone()
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.0.borrow_mut().alpha = alpha;
    }

    fn set_gestures(&mut self, gestures: Gestures) {
        self.0.borrow_mut().gestures = gestures;
    }

    fn interaction_enabled(&self) -> bool {
        self.0.borrow().interaction
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().interaction = enabled;
    }
}

/// Contrast surface with a fixed image.
#[derive(Debug)]
pub struct Contrast(pub Option<Image>);

impl ImageSource for Contrast {
    type Image = Image;

    fn image(&self) -> Option<Image> {
        self.0.clone()
    }
}

/// A delegate callback, as recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Began(SurfaceId),
    Ended(SurfaceId),
    WillDismiss(SurfaceId),
    ContentState(ContentState, ContentState),
}

/// Delegate that records callbacks and can override one animator.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: RefCell<Vec<Event>>,
    pub animator: Option<(AnimationEvent, Rc<dyn Animator>)>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl ZoomDelegate for Recorder {
    fn did_begin_presenting_overlay(&self, surface: SurfaceId) {
        self.events.borrow_mut().push(Event::Began(surface));
    }

    fn did_end_presenting_overlay(&self, surface: SurfaceId) {
        self.events.borrow_mut().push(Event::Ended(surface));
    }

    fn will_dismiss_overlay(&self, surface: SurfaceId) {
        self.events.borrow_mut().push(Event::WillDismiss(surface));
    }

    fn content_state_did_change(&self, from: ContentState, to: ContentState) {
        self.events
            .borrow_mut()
            .push(Event::ContentState(from, to));
    }

    fn animator(&self, event: AnimationEvent) -> Option<Rc<dyn Animator>> {
        self.animator
            .as_ref()
            .filter(|(overridden, _)| *overridden == event)
            .map(|(_, animator)| Rc::clone(animator))
    }
}

/// A 400x800 screen.
pub fn screen() -> Rc<dyn Container> {
    Rc::new(Screen(Size::new(400.0, 800.0)))
}

/// Controller for `photo` with no contrast image.
pub fn controller(photo: &Photo, settings: Settings) -> ZoomController<Photo> {
    ZoomController::new(screen(), photo.clone(), Box::new(Contrast(None)), settings)
}

/// Play every scheduled animation to completion, including ones scheduled by completions.
pub fn drain(zoom: &mut ZoomController<Photo>) -> usize {
    let mut played = 0;
    while zoom.has_scheduled_animations() {
        for scheduled in zoom.take_scheduled_animations() {
            played += 1;
            zoom.complete_animation(scheduled.completion);
        }
    }
    played
}
