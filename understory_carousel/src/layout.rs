// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base-layout capability and a fixed-size flow layout.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::attributes::{ItemAttributes, ItemId};
use crate::config::{Axis, LayoutConfig};

/// Snapshot of the host scroll view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollViewport {
    /// Current scroll offset (the content point at the viewport origin).
    pub offset: Point,
    /// Size of the visible region.
    pub size: Size,
}

impl ScrollViewport {
    /// Creates a viewport snapshot.
    #[must_use]
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Reads a viewport from scroll-view bounds, whose origin is the scroll offset.
    #[must_use]
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            offset: bounds.origin(),
            size: bounds.size(),
        }
    }

    /// The visible region in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }
}

/// The capabilities a host layout exposes to the carousel.
///
/// [`CarouselLayout`](crate::CarouselLayout) implements this trait as well,
/// forwarding to the base layout it wraps, so carousel layouts compose with
/// whatever sits underneath them.
pub trait ItemLayout {
    /// Returns attributes for every item intersecting `rect`, in index order.
    ///
    /// The returned values are owned copies; callers are free to mutate them.
    fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes>;

    /// Returns where scrolling should stop, given the offset the scroll view
    /// proposes and the release velocity.
    fn target_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        let _ = velocity;
        proposed
    }

    /// Called when the scroll-view bounds change. Returns `true` if a full
    /// relayout is needed.
    fn on_bounds_change(&mut self, new_bounds: Rect) -> bool {
        let _ = new_bounds;
        true
    }

    /// Adopts a new configuration.
    fn configure(&mut self, config: &LayoutConfig) {
        let _ = config;
    }
}

/// A single line of equally sized items along one axis.
///
/// Item `i` starts at `leading_inset + i * (extent + spacing)` on the main
/// axis and at the leading cross inset on the cross axis.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use understory_carousel::{FixedFlowLayout, ItemLayout, LayoutConfig};
///
/// let config = LayoutConfig::new(Size::new(320.0, 100.0), 10.0);
/// let layout = FixedFlowLayout::new(50, &config);
///
/// let items = layout.attributes_in_rect(Rect::new(0.0, 200.0, 320.0, 400.0));
/// let ids: Vec<usize> = items.iter().map(|item| item.id.index()).collect();
/// assert_eq!(ids, [1, 2, 3]);
/// assert_eq!(items[1].center, Point::new(160.0, 270.0));
/// ```
#[derive(Clone, Debug)]
pub struct FixedFlowLayout {
    count: usize,
    config: LayoutConfig,
}

impl FixedFlowLayout {
    /// Creates a layout of `count` items using the geometry in `config`.
    #[must_use]
    pub fn new(count: usize, config: &LayoutConfig) -> Self {
        Self {
            count,
            config: *config,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the layout has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sets the number of items.
    pub fn set_len(&mut self, count: usize) {
        self.count = count;
    }

    /// Returns the configuration this layout follows.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Total scrollable size, including insets.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let axis = self.config.axis;
        let insets = self.config.insets;
        let main = if self.count == 0 {
            0.0
        } else {
            self.count as f64 * self.config.pitch() - self.config.spacing
        };
        let main = main + axis.main_extent(insets.size());
        let cross = axis.cross_extent(self.config.item_size) + axis.cross_extent(insets.size());
        match axis {
            Axis::Vertical => Size::new(cross, main),
            Axis::Horizontal => Size::new(main, cross),
        }
    }

    /// Returns the attributes of item `index`, or `None` if out of range.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<ItemAttributes> {
        (index < self.count).then(|| self.item(index))
    }

    fn item(&self, index: usize) -> ItemAttributes {
        let axis = self.config.axis;
        let size = self.config.item_size;
        let main = axis.leading_inset(self.config.insets)
            + index as f64 * self.config.pitch()
            + axis.main_extent(size) * 0.5;
        let cross = axis.cross_leading_inset(self.config.insets) + axis.cross_extent(size) * 0.5;
        ItemAttributes::new(ItemId(index), axis.point(main, cross), size)
    }

    /// First index whose item may intersect `main_start`.
    fn first_index_at(&self, main_start: f64) -> usize {
        let pitch = self.config.pitch();
        if pitch <= 0.0 {
            return 0;
        }
        let lead = self.config.axis.leading_inset(self.config.insets);
        let raw = ((main_start - lead) / pitch).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else if raw >= self.count as f64 {
            self.count
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Bounded by `self.count` just above"
            )]
            {
                raw as usize
            }
        }
    }
}

impl ItemLayout for FixedFlowLayout {
    fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
        let mut out = Vec::new();
        let axis = self.config.axis;
        let pitch = self.config.pitch();
        // Items that do not advance have no area to overlap with.
        if !pitch.is_finite() || (pitch <= 0.0 && axis.main_extent(self.config.item_size) <= 0.0) {
            return out;
        }
        let (main_start, main_end) = span(axis, rect);
        let (cross_start, cross_end) = span(cross_axis(axis), rect);
        for index in self.first_index_at(main_start)..self.count {
            let item = self.item(index);
            let frame = item.frame();
            let (item_start, item_end) = span(axis, frame);
            if item_start >= main_end {
                break;
            }
            let (item_cross_start, item_cross_end) = span(cross_axis(axis), frame);
            // Edges that merely touch do not count as overlap.
            if item_end > main_start && item_cross_end > cross_start && item_cross_start < cross_end
            {
                out.push(item);
            }
        }
        out
    }

    fn configure(&mut self, config: &LayoutConfig) {
        self.config = *config;
    }
}

/// `(start, end)` of `rect` along `axis`.
fn span(axis: Axis, rect: Rect) -> (f64, f64) {
    match axis {
        Axis::Vertical => (rect.y0, rect.y1),
        Axis::Horizontal => (rect.x0, rect.x1),
    }
}

fn cross_axis(axis: Axis) -> Axis {
    match axis {
        Axis::Vertical => Axis::Horizontal,
        Axis::Horizontal => Axis::Vertical,
    }
}
