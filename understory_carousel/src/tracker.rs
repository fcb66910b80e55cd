// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental bookkeeping of which items carry a smoothing behavior.
//!
//! ## Usage
//!
//! 1) After each layout pass, call [`VisibleItemTracker::reconcile`] with the
//!    attributes that are now visible.
//! 2) Items that left the viewport lose their behavior; items that entered it
//!    get a new one anchored at their center. Items that stayed are untouched.
//! 3) Call [`VisibleItemTracker::reset_all`] when the layout is invalidated and
//!    must be rebuilt from scratch.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::attributes::{ItemAttributes, ItemId};
use crate::simulation::{BehaviorId, SmoothingSimulation};

#[derive(Copy, Clone, Debug)]
struct TrackedItem {
    behavior: BehaviorId,
    /// Latest known layout attributes of the item.
    attributes: ItemAttributes,
}

/// What a call to [`VisibleItemTracker::reconcile`] changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Behaviors created for newly visible items.
    pub added: usize,
    /// Behaviors removed for items that are no longer visible.
    pub removed: usize,
    /// Visible items left untracked because their attributes were unavailable.
    pub skipped: usize,
}

impl ReconcileSummary {
    /// Returns `true` if the tracked set did not change.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// The set of tracked items and the behaviors attached to them.
///
/// After a reconcile the tracked set equals the visible set that was passed
/// in, minus any identifiers whose attributes could not be looked up. Each
/// tracked item owns exactly one behavior.
#[derive(Clone, Debug, Default)]
pub struct VisibleItemTracker {
    tracked: HashMap<ItemId, TrackedItem>,
}

impl VisibleItemTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracked: HashMap::new(),
        }
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Returns `true` if no item is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Returns `true` if `id` currently has a behavior.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.tracked.contains_key(&id)
    }

    /// Returns the behavior attached to `id`, if any.
    #[must_use]
    pub fn behavior(&self, id: ItemId) -> Option<BehaviorId> {
        self.tracked.get(&id).map(|item| item.behavior)
    }

    /// Iterates over the tracked identifiers in no particular order.
    pub fn tracked_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.tracked.keys().copied()
    }

    /// Reconciles the tracked set against the attributes of the visible items.
    pub fn reconcile<S>(&mut self, visible: &[ItemAttributes], sim: &mut S) -> ReconcileSummary
    where
        S: SmoothingSimulation + ?Sized,
    {
        let by_id: HashMap<ItemId, &ItemAttributes> =
            visible.iter().map(|item| (item.id, item)).collect();
        self.reconcile_with(
            visible.iter().map(|item| item.id),
            |id| by_id.get(&id).map(|item| **item),
            sim,
        )
    }

    /// Reconciles the tracked set against `visible`, looking up attributes
    /// of newly visible items through `lookup`.
    ///
    /// Behaviors of items missing from `visible` are removed first, then
    /// behaviors are created for visible items that are not yet tracked. A
    /// newly visible item for which `lookup` returns `None` is skipped and
    /// stays untracked until a later pass can resolve it.
    pub fn reconcile_with<I, F, S>(
        &mut self,
        visible: I,
        mut lookup: F,
        sim: &mut S,
    ) -> ReconcileSummary
    where
        I: IntoIterator<Item = ItemId>,
        F: FnMut(ItemId) -> Option<ItemAttributes>,
        S: SmoothingSimulation + ?Sized,
    {
        let visible: Vec<ItemId> = visible.into_iter().collect();
        let visible_set: HashSet<ItemId> = visible.iter().copied().collect();
        let mut summary = ReconcileSummary::default();

        self.tracked.retain(|id, item| {
            let keep = visible_set.contains(id);
            if !keep {
                sim.remove_behavior(item.behavior);
                summary.removed += 1;
            }
            keep
        });

        for id in visible {
            if self.tracked.contains_key(&id) {
                continue;
            }
            let Some(attributes) = lookup(id) else {
                summary.skipped += 1;
                continue;
            };
            let behavior = sim.create_behavior(&attributes, attributes.center);
            self.tracked.insert(
                id,
                TrackedItem {
                    behavior,
                    attributes,
                },
            );
            summary.added += 1;
        }

        summary
    }

    /// Removes every behavior and clears the tracked set.
    ///
    /// Returns how many behaviors were removed.
    pub fn reset_all<S>(&mut self, sim: &mut S) -> usize
    where
        S: SmoothingSimulation + ?Sized,
    {
        let removed = self.tracked.len();
        for (_, item) in self.tracked.drain() {
            sim.remove_behavior(item.behavior);
        }
        removed
    }

    /// Replaces the stored attributes of tracked items found in `current`.
    ///
    /// Untracked items in `current` are ignored; the tracked set itself does
    /// not change. Returns how many tracked items were updated.
    pub fn refresh(&mut self, current: &[ItemAttributes]) -> usize {
        let mut updated = 0;
        for attributes in current {
            if let Some(item) = self.tracked.get_mut(&attributes.id) {
                item.attributes = *attributes;
                updated += 1;
            }
        }
        updated
    }

    /// Hands every tracked item's latest attributes to the simulation so it
    /// can re-read the item's state.
    pub fn resync_all<S>(&self, sim: &mut S)
    where
        S: SmoothingSimulation + ?Sized,
    {
        for item in self.tracked.values() {
            sim.resync_behavior(item.behavior, &item.attributes);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use hashbrown::HashMap;
    use kurbo::{Point, Size};

    use super::{ReconcileSummary, VisibleItemTracker};
    use crate::attributes::{ItemAttributes, ItemId};
    use crate::simulation::{BehaviorId, SmoothingSimulation};

    #[derive(Default)]
    struct Anchors {
        next: u64,
        live: HashMap<BehaviorId, (ItemId, Point)>,
        resynced: Vec<(BehaviorId, Point)>,
    }

    impl SmoothingSimulation for Anchors {
        fn create_behavior(&mut self, item: &ItemAttributes, anchor: Point) -> BehaviorId {
            self.next += 1;
            let id = BehaviorId::new(self.next);
            self.live.insert(id, (item.id, anchor));
            id
        }

        fn remove_behavior(&mut self, id: BehaviorId) {
            assert!(self.live.remove(&id).is_some(), "removed unknown behavior");
        }

        fn resync_behavior(&mut self, id: BehaviorId, item: &ItemAttributes) {
            self.resynced.push((id, item.center));
        }
    }

    fn items(ids: &[usize]) -> Vec<ItemAttributes> {
        ids.iter()
            .map(|&i| {
                ItemAttributes::new(
                    ItemId(i),
                    Point::new(50.0, 50.0 + 110.0 * i as f64),
                    Size::new(100.0, 100.0),
                )
            })
            .collect()
    }

    fn sorted_ids(tracker: &VisibleItemTracker) -> Vec<usize> {
        let mut ids: Vec<usize> = tracker.tracked_ids().map(ItemId::index).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn adds_then_diffs() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();

        let summary = tracker.reconcile(&items(&[0, 1, 2]), &mut sim);
        assert_eq!(
            summary,
            ReconcileSummary {
                added: 3,
                removed: 0,
                skipped: 0
            }
        );
        assert_eq!(sorted_ids(&tracker), [0, 1, 2]);
        let kept = tracker.behavior(ItemId(2)).unwrap();

        let summary = tracker.reconcile(&items(&[2, 3]), &mut sim);
        assert_eq!((summary.added, summary.removed), (1, 2));
        assert_eq!(sorted_ids(&tracker), [2, 3]);
        assert_eq!(tracker.behavior(ItemId(2)), Some(kept));
        assert_eq!(sim.live.len(), 2);
    }

    #[test]
    fn anchors_at_item_center() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        tracker.reconcile(&items(&[3]), &mut sim);

        let behavior = tracker.behavior(ItemId(3)).unwrap();
        assert_eq!(sim.live[&behavior], (ItemId(3), Point::new(50.0, 380.0)));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        let visible = items(&[4, 5, 6]);

        tracker.reconcile(&visible, &mut sim);
        let summary = tracker.reconcile(&visible, &mut sim);
        assert!(summary.is_unchanged());
        assert_eq!(tracker.len(), 3);
        assert_eq!(sim.live.len(), 3);
    }

    #[test]
    fn duplicate_ids_get_one_behavior() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        let mut visible = items(&[1, 1]);
        visible.extend(items(&[1]));

        let summary = tracker.reconcile(&visible, &mut sim);
        assert_eq!(summary.added, 1);
        assert_eq!(sim.live.len(), 1);
    }

    #[test]
    fn empty_visible_set_clears_everything() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        tracker.reconcile(&items(&[0, 1]), &mut sim);

        let summary = tracker.reconcile(&[], &mut sim);
        assert_eq!(summary.removed, 2);
        assert!(tracker.is_empty());
        assert!(sim.live.is_empty());
    }

    #[test]
    fn missing_lookup_is_skipped() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        let known = items(&[0, 2]);

        let summary = tracker.reconcile_with(
            [ItemId(0), ItemId(1), ItemId(2)],
            |id| known.iter().find(|item| item.id == id).copied(),
            &mut sim,
        );
        assert_eq!(summary.skipped, 1);
        assert_eq!(sorted_ids(&tracker), [0, 2]);
        assert!(!tracker.contains(ItemId(1)));
    }

    #[test]
    fn reset_and_resync() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        tracker.reconcile(&items(&[0, 1, 2]), &mut sim);

        tracker.resync_all(&mut sim);
        assert_eq!(sim.resynced.len(), 3);

        assert_eq!(tracker.reset_all(&mut sim), 3);
        assert!(tracker.is_empty());
        assert!(sim.live.is_empty());
        assert_eq!(tracker.reset_all(&mut sim), 0);
    }

    #[test]
    fn resync_uses_refreshed_attributes() {
        let mut sim = Anchors::default();
        let mut tracker = VisibleItemTracker::new();
        tracker.reconcile(&items(&[0, 1]), &mut sim);
        let moved = tracker.behavior(ItemId(1)).unwrap();

        // Item 1 moved; item 7 is not tracked and must stay that way.
        let mut current = items(&[1, 7]);
        current[0].center = Point::new(80.0, 500.0);
        assert_eq!(tracker.refresh(&current), 1);
        assert!(!tracker.contains(ItemId(7)));

        tracker.resync_all(&mut sim);
        assert!(sim.resynced.contains(&(moved, Point::new(80.0, 500.0))));
        assert_eq!(sim.resynced.len(), 2);
    }
}
