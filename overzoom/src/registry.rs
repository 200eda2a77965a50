// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom behaviors for a group of surfaces, keyed by surface identity.

use hashbrown::HashMap;
use tracing::debug;

use crate::controller::ZoomController;
use crate::surface::{SurfaceId, Zoomable};

/// The zoom controllers of one screen, keyed by [`SurfaceId`].
///
/// Inserting or removing a controller resets it, so a surface never keeps an
/// overlay or recognizers from a behavior that no longer manages it.
#[derive(Debug)]
pub struct ZoomBehaviors<S: Zoomable> {
    controllers: HashMap<SurfaceId, ZoomController<S>>,
}

impl<S: Zoomable> Default for ZoomBehaviors<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Zoomable> ZoomBehaviors<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    /// Manage `controller`'s surface, returning the controller it replaces.
    ///
    /// The replaced controller is reset before `controller`'s recognizers are
    /// attached again, since both address the same host surface. `controller`
    /// takes over the replaced one's record of the surface's interaction flag,
    /// so removing it later restores the surface as it was before either.
    pub fn insert(&mut self, mut controller: ZoomController<S>) -> Option<ZoomController<S>> {
        let surface = controller.surface_id();
        let previous = self.controllers.remove(&surface).map(|mut previous| {
            previous.reset();
            previous
        });
        if let Some(previous) = &previous {
            debug!(?surface, "replacing zoom behavior");
            controller.inherit_original_interaction(previous);
            controller.reattach();
        }
        self.controllers.insert(surface, controller);
        previous
    }

    /// Stop managing `surface`, returning its reset controller.
    pub fn remove(&mut self, surface: SurfaceId) -> Option<ZoomController<S>> {
        let mut controller = self.controllers.remove(&surface)?;
        controller.reset();
        debug!(?surface, "removed zoom behavior");
        Some(controller)
    }

    /// The controller managing `surface`.
    #[must_use]
    pub fn get(&self, surface: SurfaceId) -> Option<&ZoomController<S>> {
        self.controllers.get(&surface)
    }

    /// Mutable access to the controller managing `surface`.
    pub fn get_mut(&mut self, surface: SurfaceId) -> Option<&mut ZoomController<S>> {
        self.controllers.get_mut(&surface)
    }

    /// Whether `surface` has a zoom behavior.
    #[must_use]
    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.controllers.contains_key(&surface)
    }

    /// Number of managed surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no surface is managed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// All controllers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &ZoomController<S>)> + '_ {
        self.controllers.iter().map(|(id, controller)| (*id, controller))
    }

    /// All controllers, mutably, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SurfaceId, &mut ZoomController<S>)> + '_ {
        self.controllers
            .iter_mut()
            .map(|(id, controller)| (*id, controller))
    }

    /// Reset and drop every controller.
    pub fn clear(&mut self) {
        for (_, mut controller) in self.controllers.drain() {
            controller.reset();
        }
    }
}
