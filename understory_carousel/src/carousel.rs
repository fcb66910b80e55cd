// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

use crate::attributes::{ItemAttributes, ItemTransform};
use crate::config::{Axis, ConfigError, LayoutConfig};
use crate::intensity::intensity;
use crate::layout::{ItemLayout, ScrollViewport};
use crate::simulation::SmoothingSimulation;
use crate::tracker::{ReconcileSummary, VisibleItemTracker};

/// How far before the reference line the fade starts, in item extents.
const LEADING_WINDOW: f64 = 5.0;
/// How far past the reference line the fade ends, in item extents.
const TRAILING_WINDOW: f64 = 0.5;

/// Carousel layout over a base layout and a smoothing simulation.
///
/// `CarouselLayout` wraps a base [`ItemLayout`] and rewrites the transform,
/// opacity, and stacking order of the attributes it produces. Items whose
/// distance from the leading edge of the viewport is below half an item
/// extent shrink and fade together along [`intensity`]; the fade window
/// starts five extents before that line. It also keeps one smoothing behavior
/// per visible item in the injected [`SmoothingSimulation`], and can snap
/// scroll-stop offsets to item boundaries.
///
/// The host drives it from its layout callbacks:
/// - [`set_viewport`](Self::set_viewport) or
///   [`on_bounds_change`](Self::on_bounds_change) when the scroll view moves
///   or resizes,
/// - [`prepare_pass`](Self::prepare_pass) at the start of each layout pass,
/// - [`attributes_for_rect`](Self::attributes_for_rect) to obtain what to draw,
/// - [`snap_target`](Self::snap_target) when a drag ends.
///
/// Without a viewport the layout degrades gracefully: passes do nothing and
/// attributes come back exactly as the base layout produced them.
///
/// Dropping a carousel does not detach its behaviors. When the simulation is
/// borrowed (`S = &mut Sim`) and outlives the carousel, call
/// [`clear_behaviors`](Self::clear_behaviors) or
/// [`into_parts`](Self::into_parts) first, or the simulation keeps behaviors
/// for items nobody tracks anymore.
#[derive(Debug)]
pub struct CarouselLayout<L, S> {
    base: L,
    simulation: S,
    tracker: VisibleItemTracker,
    config: LayoutConfig,
    viewport: Option<ScrollViewport>,
    last_visible: usize,
}

impl<L, S> CarouselLayout<L, S>
where
    L: ItemLayout,
    S: SmoothingSimulation,
{
    /// Creates a carousel over `base`, handing `config` to the base layout.
    ///
    /// No viewport is attached yet; call [`set_viewport`](Self::set_viewport)
    /// before the first pass.
    ///
    /// `config` is not validated; use [`try_new`](Self::try_new) for
    /// configurations that come from outside. Non-finite geometry still never
    /// yields non-finite transforms or snap targets: those fall back to the
    /// identity transform and the base layout's target.
    #[must_use]
    pub fn new(mut base: L, simulation: S, config: LayoutConfig) -> Self {
        base.configure(&config);
        Self {
            base,
            simulation,
            tracker: VisibleItemTracker::new(),
            config,
            viewport: None,
            last_visible: 0,
        }
    }

    /// Like [`new`](Self::new), but rejects configurations that
    /// [`LayoutConfig::validate`] refuses.
    pub fn try_new(base: L, simulation: S, config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(base, simulation, config))
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validates and adopts `config`, then rebuilds all behaviors.
    ///
    /// On error the current configuration is left untouched.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        cdebug!(?config, "set_config");
        self.config = config;
        self.base.configure(&config);
        self.reset_layout();
        Ok(())
    }

    /// Returns `true` if scroll-stop offsets snap to item boundaries.
    #[must_use]
    pub fn paging_enabled(&self) -> bool {
        self.config.paging
    }

    /// Enables or disables paging. Takes effect on the next snap.
    pub fn set_paging_enabled(&mut self, paging: bool) {
        self.config.paging = paging;
    }

    /// Returns the attached viewport, if any.
    #[must_use]
    pub fn viewport(&self) -> Option<ScrollViewport> {
        self.viewport
    }

    /// Attaches, replaces, or detaches the host viewport.
    pub fn set_viewport(&mut self, viewport: Option<ScrollViewport>) {
        self.viewport = viewport;
    }

    /// Moves the attached viewport to `offset`. Does nothing without a viewport.
    pub fn set_scroll_offset(&mut self, offset: Point) {
        if let Some(viewport) = &mut self.viewport {
            viewport.offset = offset;
        }
    }

    /// Returns the wrapped base layout.
    #[must_use]
    pub fn base(&self) -> &L {
        &self.base
    }

    /// Returns the wrapped base layout mutably.
    ///
    /// Call [`reset_layout`](Self::reset_layout) after changes that move items.
    pub fn base_mut(&mut self) -> &mut L {
        &mut self.base
    }

    /// Returns the smoothing simulation.
    #[must_use]
    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    /// Returns the smoothing simulation mutably, for example to step it.
    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    /// Returns the visible-item tracker.
    #[must_use]
    pub fn tracker(&self) -> &VisibleItemTracker {
        &self.tracker
    }

    /// Removes every behavior and hands back the base layout and simulation.
    pub fn into_parts(mut self) -> (L, S) {
        self.clear_behaviors();
        (self.base, self.simulation)
    }

    /// Detaches every behavior without starting a new pass.
    ///
    /// Returns how many behaviors were removed. The next
    /// [`prepare_pass`](Self::prepare_pass) attaches fresh ones.
    pub fn clear_behaviors(&mut self) -> usize {
        self.last_visible = 0;
        self.tracker.reset_all(&mut self.simulation)
    }

    /// Starts a layout pass: reconciles behaviors against the items visible
    /// in the viewport.
    ///
    /// Without a viewport this is a no-op and reports no change.
    pub fn prepare_pass(&mut self) -> ReconcileSummary {
        let Some(viewport) = self.viewport else {
            ctrace!("prepare_pass skipped: no viewport");
            return ReconcileSummary::default();
        };
        let visible = self.base.attributes_in_rect(viewport.visible_rect());
        self.last_visible = visible.len();
        let summary = self.tracker.reconcile(&visible, &mut self.simulation);
        ctrace!(
            visible = visible.len(),
            added = summary.added,
            removed = summary.removed,
            skipped = summary.skipped,
            "prepare_pass"
        );
        summary
    }

    /// Returns the attributes of items intersecting `rect`, with the carousel
    /// transform applied.
    ///
    /// The distance of each item is measured from the leading edge of the
    /// viewport (after the leading section inset) to the item's center. The
    /// stacking order follows the item index, so later items draw on top.
    pub fn attributes_for_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
        let mut items = self.base.attributes_in_rect(rect);
        let Some(viewport) = self.viewport else {
            return items;
        };
        let axis = self.config.axis;
        let reference = axis.main(viewport.offset) + axis.leading_inset(self.config.insets);
        for item in &mut items {
            item.z_index = i64::try_from(item.id.index()).unwrap_or(i64::MAX);
            self.compute_transform(item, axis.main(item.center) - reference);
        }
        items
    }

    /// Applies the carousel transform for an item `distance` units past the
    /// reference line.
    ///
    /// Items at or beyond half an extent past the line, and all items when the
    /// extent is not positive, get the identity transform and full opacity.
    /// Others are moved onto the half-extent line and scaled and faded by
    /// `intensity(distance, -5 * extent, extent / 2)`.
    pub fn compute_transform(&self, item: &mut ItemAttributes, distance: f64) {
        let extent = self.config.item_extent();
        let threshold = extent * TRAILING_WINDOW;
        if !extent.is_finite() || extent <= 0.0 || distance.is_nan() || distance >= threshold {
            item.clear_transform();
            return;
        }
        let scale = intensity(distance, -extent * LEADING_WINDOW, threshold);
        item.transform = ItemTransform {
            translation: self.config.axis.main_vec(threshold - distance),
            scale,
        };
        item.opacity = scale;
    }

    /// Returns where scrolling should come to rest.
    ///
    /// With paging disabled this is the base layout's target. With paging
    /// enabled the main-axis component is rounded to the nearest item
    /// boundary, a whole multiple of `extent + spacing`; the cross-axis
    /// component still comes from the base layout.
    pub fn snap_target(&self, proposed: Point, velocity: Vec2) -> Point {
        let target = self.base.target_offset(proposed, velocity);
        if !self.config.paging {
            return target;
        }
        let pitch = self.config.pitch();
        if !pitch.is_finite() || pitch <= 0.0 {
            return target;
        }
        let axis = self.config.axis;
        let row = (axis.main(proposed) / pitch).round();
        let main = row * self.config.item_extent() + row * self.config.spacing;
        axis.point(main, axis.cross(target))
    }

    /// Absorbs a change of the scroll-view bounds.
    ///
    /// The bounds are passed on to the base layout (its answer is ignored) and
    /// become the current viewport. Tracked items then pick up their current
    /// attributes from the base layout and are resynced into the simulation.
    /// Always returns `false`: a bounds change never requires a full relayout.
    pub fn on_bounds_change(&mut self, new_bounds: Rect) -> bool {
        let _ = self.base.on_bounds_change(new_bounds);
        let viewport = ScrollViewport::from_bounds(new_bounds);
        self.viewport = Some(viewport);
        if !self.tracker.is_empty() {
            let current = self.base.attributes_in_rect(viewport.visible_rect());
            self.tracker.refresh(&current);
        }
        self.tracker.resync_all(&mut self.simulation);
        ctrace!(tracked = self.tracker.len(), "on_bounds_change");
        false
    }

    /// Drops every behavior and runs a fresh [`prepare_pass`](Self::prepare_pass).
    pub fn reset_layout(&mut self) {
        cdebug!(tracked = self.tracker.len(), "reset_layout");
        self.clear_behaviors();
        self.prepare_pass();
    }

    /// Returns a snapshot of the current state for inspection and logging.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            viewport: self.viewport,
            axis: self.config.axis,
            paging: self.config.paging,
            tracked: self.tracker.len(),
            last_visible: self.last_visible,
        }
    }
}

impl<L, S> ItemLayout for CarouselLayout<L, S>
where
    L: ItemLayout,
    S: SmoothingSimulation,
{
    fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
        self.attributes_for_rect(rect)
    }

    fn target_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        self.snap_target(proposed, velocity)
    }

    fn on_bounds_change(&mut self, new_bounds: Rect) -> bool {
        Self::on_bounds_change(self, new_bounds)
    }

    fn configure(&mut self, config: &LayoutConfig) {
        if let Err(_err) = self.set_config(*config) {
            cdebug!(error = %_err, "ignoring invalid configuration");
        }
    }
}

/// Snapshot of a [`CarouselLayout`]'s state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Attached viewport, if any.
    pub viewport: Option<ScrollViewport>,
    /// Scroll axis.
    pub axis: Axis,
    /// Whether paging is enabled.
    pub paging: bool,
    /// Number of items currently carrying a behavior.
    pub tracked: usize,
    /// Number of items visible in the most recent pass.
    pub last_visible: usize,
}
