// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host surface traits and the surface models a controller owns.
//!
//! The host implements [`Container`], [`ImageSource`] and [`Zoomable`] for its
//! own views. The overlay, the pannable viewport and the backdrop are plain
//! models owned by the controller; the host reads them after each event and
//! renders whatever the [`LayerStack`] says is attached.

use kurbo::{Affine, Point, Rect, Size};
use overzoom_geometry::{ContentMode, PannableViewport, SpaceChain, transformed_frame};
use overzoom_gesture::Gestures;
use peniko::Color;
use smallvec::SmallVec;

/// Stable identity of a host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Identity of a host view used as a z-order ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// A decoded image.
pub trait Bitmap {
    /// Natural size of the image.
    fn size(&self) -> Size;
}

/// The view zooming takes place in. Must be an ancestor of the source surface.
pub trait Container {
    /// Size of the container; its origin is the coordinate origin.
    fn size(&self) -> Size;
}

/// Anything that can currently show an image.
pub trait ImageSource {
    /// Host image type.
    type Image: Bitmap + Clone;

    /// The image shown right now, if any.
    fn image(&self) -> Option<Self::Image>;
}

/// A host image surface that can be zoomed.
pub trait Zoomable: ImageSource {
    /// Stable identity of this surface.
    fn surface_id(&self) -> SurfaceId;

    /// How the image is fitted into the surface.
    fn content_mode(&self) -> ContentMode;

    /// Frame in the parent's coordinate space.
    fn frame(&self) -> Rect;

    /// Ancestor spaces from the parent up to (excluding) the container.
    fn ancestry(&self) -> SpaceChain;

    /// Set the surface's opacity.
    fn set_alpha(&mut self, alpha: f64);

    /// Replace the set of recognizers attached to the surface.
    fn set_gestures(&mut self, gestures: Gestures);

    /// Whether the surface currently receives touches.
    fn interaction_enabled(&self) -> bool;

    /// Enable or disable touch delivery.
    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Bounds in the surface's own coordinate space.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame().size())
    }
}

/// What a managed surface currently renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceImage<I> {
    /// The primary image.
    Primary(I),
    /// The contrast image, drawn at `size`.
    Contrast {
        /// The contrast image.
        image: I,
        /// Size to draw it at (the primary image's size).
        size: Size,
    },
    /// A fully transparent placeholder of the given size that still receives touches.
    Clear(Size),
}

impl<I> SurfaceImage<I> {
    /// Returns `true` for the transparent placeholder.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear(_))
    }

    /// Returns `true` while the contrast image is shown.
    #[must_use]
    pub fn is_contrast(&self) -> bool {
        matches!(self, Self::Contrast { .. })
    }
}

/// The plain image surface that stands in for the source while transitioning.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySurface<I> {
    /// Image shown, if any.
    pub image: Option<I>,
    /// Frame in container coordinates, before `transform`.
    pub frame: Rect,
    /// Transform applied about the frame's center.
    pub transform: Affine,
    /// How the image is fitted into the frame.
    pub content_mode: ContentMode,
}

impl<I> Default for OverlaySurface<I> {
    fn default() -> Self {
        Self {
            image: None,
            frame: Rect::ZERO,
            transform: Affine::IDENTITY,
            content_mode: ContentMode::default(),
        }
    }
}

impl<I> OverlaySurface<I> {
    /// The frame as it appears on screen, with `transform` applied.
    #[must_use]
    pub fn visual_frame(&self) -> Rect {
        transformed_frame(self.frame, self.transform)
    }
}

/// The pannable, zoomable viewport shown once the overlay is interactive.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportSurface<I> {
    /// Scroll and zoom model.
    pub pannable: PannableViewport,
    /// What the scrollable image renders.
    pub content: Option<SurfaceImage<I>>,
    /// How the image is fitted into the content.
    pub content_mode: ContentMode,
    /// Recognizers the host should attach.
    pub gestures: Gestures,
}

impl<I> Default for ViewportSurface<I> {
    fn default() -> Self {
        Self {
            pannable: PannableViewport::new(),
            content: None,
            content_mode: ContentMode::default(),
            gestures: Gestures::PINCH | Gestures::PAN,
        }
    }
}

impl<I> ViewportSurface<I> {
    /// Whether the viewport's own pinch recognizer is enabled.
    #[must_use]
    pub fn pinch_enabled(&self) -> bool {
        self.gestures.contains(Gestures::PINCH)
    }

    /// Enable or disable the viewport's own pinch recognizer.
    pub fn set_pinch_enabled(&mut self, enabled: bool) {
        self.gestures.set(Gestures::PINCH, enabled);
    }
}

/// The dimming view behind the overlay, pinned to the container's edges.
#[derive(Clone, Copy, Debug)]
pub struct Backdrop {
    /// Fill color.
    pub color: Color,
    /// Opacity on top of `color`'s own alpha.
    pub alpha: f64,
    /// Recognizers the host should attach.
    pub gestures: Gestures,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            color: Color::TRANSPARENT,
            alpha: 0.0,
            gestures: Gestures::empty(),
        }
    }
}

/// A managed visual attached to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The dimming backdrop.
    Backdrop,
    /// The overlay surface.
    Overlay,
    /// The pannable viewport.
    Viewport,
}

/// Managed visuals attached to the container, back to front.
///
/// When a ceiling view is set, the whole stack sits directly below it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStack {
    layers: SmallVec<[Layer; 3]>,
    below: Option<ViewId>,
}

impl LayerStack {
    /// Creates an empty stack placed below `below`, or on top when `None`.
    #[must_use]
    pub fn new(below: Option<ViewId>) -> Self {
        Self {
            layers: SmallVec::new(),
            below,
        }
    }

    /// View every layer is kept below.
    #[must_use]
    pub fn below(&self) -> Option<ViewId> {
        self.below
    }

    /// Attach `layer` in front of the others, moving it if already attached.
    pub fn insert(&mut self, layer: Layer) {
        self.remove(layer);
        self.layers.push(layer);
    }

    /// Detach `layer`; returns whether it was attached.
    pub fn remove(&mut self, layer: Layer) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| *l != layer);
        self.layers.len() != before
    }

    /// Whether `layer` is attached.
    #[must_use]
    pub fn contains(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// Attached layers, back to front.
    pub fn iter(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.iter().copied()
    }

    /// Number of attached layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.layers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_moves_existing_layer_to_front() {
        let mut stack = LayerStack::new(Some(ViewId(9)));
        stack.insert(Layer::Backdrop);
        stack.insert(Layer::Overlay);
        stack.insert(Layer::Viewport);
        stack.insert(Layer::Overlay);
        let order: Vec<_> = stack.iter().collect();
        assert_eq!(order, [Layer::Backdrop, Layer::Viewport, Layer::Overlay]);
        assert_eq!(stack.below(), Some(ViewId(9)));
    }

    #[test]
    fn remove_reports_whether_attached() {
        let mut stack = LayerStack::default();
        stack.insert(Layer::Viewport);
        assert!(stack.remove(Layer::Viewport));
        assert!(!stack.remove(Layer::Viewport));
        assert!(stack.is_empty());
    }

    #[test]
    fn overlay_visual_frame_applies_transform() {
        let overlay = OverlaySurface::<()> {
            frame: Rect::new(0.0, 0.0, 100.0, 100.0),
            transform: Affine::scale(2.0),
            ..OverlaySurface::default()
        };
        assert_eq!(overlay.visual_frame(), Rect::new(-50.0, -50.0, 150.0, 150.0));
    }

    #[test]
    fn viewport_pinch_toggle() {
        let mut viewport = ViewportSurface::<()>::default();
        assert!(viewport.pinch_enabled());
        viewport.set_pinch_enabled(false);
        assert!(!viewport.pinch_enabled());
        assert!(viewport.gestures.contains(Gestures::PAN));
    }
}
