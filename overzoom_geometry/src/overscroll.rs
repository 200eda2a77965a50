// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An edge of a pannable viewport's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Minimum y.
    Top,
    /// Minimum x.
    Left,
    /// Maximum y.
    Bottom,
    /// Maximum x.
    Right,
}

impl Edge {
    /// All edges, in the order bounce actions are considered.
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];
}

/// How far a pannable viewport currently overscrolls past each content edge.
///
/// All values are non-negative; at most one of `top`/`bottom` (and of
/// `left`/`right`) is non-zero unless the content is smaller than the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BounceOffsets {
    /// Overscroll past the top edge.
    pub top: f64,
    /// Overscroll past the left edge.
    pub left: f64,
    /// Overscroll past the bottom edge.
    pub bottom: f64,
    /// Overscroll past the right edge.
    pub right: f64,
}

impl BounceOffsets {
    /// No overscroll in any direction.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Overscroll past `edge`.
    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }

    /// The largest overscroll across all edges.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.top.max(self.left).max(self.bottom).max(self.right)
    }

    /// Returns `true` if the viewport is within its content bounds.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.max() <= 0.0
    }

    /// Edges whose overscroll strictly exceeds `threshold`, in [`Edge::ALL`] order.
    pub fn edges_exceeding(&self, threshold: f64) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL
            .into_iter()
            .filter(move |edge| self.get(*edge) > threshold)
    }
}
