// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate-space chains: convert frames from a surface's parent space into
//! an ancestor container's space.
//!
//! A toolkit view hierarchy positions each view by a frame in its parent's
//! space and may additionally apply a transform about the view's center. A
//! plain sum of origins is therefore not enough to find where a deeply nested
//! surface sits on screen; every intermediate transform has to be applied.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Affine, Rect};
//! use overzoom_geometry::{LocalSpace, SpaceChain};
//!
//! // A card at (100, 50) inside the container, scaled 2x about its center.
//! let card = LocalSpace::new(Rect::new(100.0, 50.0, 200.0, 150.0))
//!     .with_transform(Affine::scale(2.0));
//! let chain = SpaceChain::from_spaces([card]);
//!
//! // An image filling the card's top-left quarter.
//! let in_container = chain.convert_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(in_container, Rect::new(50.0, 0.0, 150.0, 100.0));
//! ```

use kurbo::{Affine, Point, Rect};
use smallvec::SmallVec;

use crate::frame::bounding_box;

/// The local coordinate space established by one ancestor surface.
///
/// Points in this space have their origin at the ancestor's top-left corner
/// (before its transform is applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalSpace {
    /// Untransformed frame of the ancestor in its own parent's space.
    pub frame: Rect,
    /// Transform applied about the center of `frame`.
    pub transform: Affine,
}

impl LocalSpace {
    /// Creates an untransformed space for an ancestor at `frame`.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            transform: Affine::IDENTITY,
        }
    }

    /// Returns this space with `transform` applied about its center.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// The affine map from this space into its parent's space.
    #[must_use]
    pub fn to_parent(&self) -> Affine {
        let half = self.frame.size().to_vec2() / 2.0;
        let center = self.frame.center().to_vec2();
        Affine::translate(center) * self.transform * Affine::translate(-half)
    }
}

/// Chain of ancestor spaces from a surface's parent up to (excluding) the
/// container the overlay lives in.
///
/// An empty chain means the surface's parent *is* the container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpaceChain {
    spaces: SmallVec<[LocalSpace; 4]>,
}

impl SpaceChain {
    /// An empty chain: frames are already in container space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chain from spaces ordered innermost (the direct parent) first.
    #[must_use]
    pub fn from_spaces(spaces: impl IntoIterator<Item = LocalSpace>) -> Self {
        Self {
            spaces: spaces.into_iter().collect(),
        }
    }

    /// Appends the next outer ancestor.
    pub fn push(&mut self, space: LocalSpace) {
        self.spaces.push(space);
    }

    /// Number of ancestor spaces between the surface and the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns `true` if the surface's parent is the container itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The combined affine map from the innermost space into container space.
    #[must_use]
    pub fn to_container(&self) -> Affine {
        self.spaces
            .iter()
            .fold(Affine::IDENTITY, |acc, space| space.to_parent() * acc)
    }

    /// Converts a point from the innermost space into container space.
    #[must_use]
    pub fn convert_point(&self, point: Point) -> Point {
        self.to_container() * point
    }

    /// Converts a frame from the innermost space into container space.
    ///
    /// Rotations or shears along the chain yield the conservative axis-aligned
    /// bounds of the converted frame.
    #[must_use]
    pub fn convert_rect(&self, rect: Rect) -> Rect {
        if self.spaces.is_empty() {
            return rect;
        }
        bounding_box(self.to_container(), rect)
    }
}
