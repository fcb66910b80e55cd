// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam to the host's physics engine.
//!
//! The carousel never steps a simulation. It only attaches one smoothing
//! behavior per visible item, detaches it when the item scrolls away, and asks
//! the engine to re-read item state after a bounds change. Everything else,
//! including how the rendered position relaxes toward the anchor, belongs to
//! the host.

use kurbo::Point;

use crate::attributes::ItemAttributes;

/// Handle to a smoothing behavior owned by a [`SmoothingSimulation`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BehaviorId(u64);

impl BehaviorId {
    /// Wraps a raw handle chosen by the simulation.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A frame-driven physics engine that can soften item motion.
pub trait SmoothingSimulation {
    /// Attaches `item` to `anchor` and returns a handle to the new behavior.
    fn create_behavior(&mut self, item: &ItemAttributes, anchor: Point) -> BehaviorId;

    /// Detaches and drops the behavior. Unknown handles are ignored.
    fn remove_behavior(&mut self, id: BehaviorId);

    /// Re-reads the current state of the behavior's item.
    ///
    /// `item` carries the item's latest layout attributes, taken from the base
    /// layout after the bounds change. The simulation decides how to reconcile
    /// them with its own state; it should not snap the item back to where the
    /// behavior was first attached.
    fn resync_behavior(&mut self, id: BehaviorId, item: &ItemAttributes);
}

impl<S: SmoothingSimulation + ?Sized> SmoothingSimulation for &mut S {
    fn create_behavior(&mut self, item: &ItemAttributes, anchor: Point) -> BehaviorId {
        (**self).create_behavior(item, anchor)
    }

    fn remove_behavior(&mut self, id: BehaviorId) {
        (**self).remove_behavior(id);
    }

    fn resync_behavior(&mut self, id: BehaviorId, item: &ItemAttributes) {
        (**self).resync_behavior(id, item);
    }
}
