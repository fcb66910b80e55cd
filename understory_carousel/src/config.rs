// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration: item geometry, scroll axis, and paging.

use core::fmt;

use kurbo::{Insets, Point, Size, Vec2};

/// The axis along which the item strip scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Items are stacked top to bottom; the main axis is y.
    #[default]
    Vertical,
    /// Items are stacked left to right; the main axis is x.
    Horizontal,
}

impl Axis {
    /// Returns the main-axis component of `point`.
    #[must_use]
    pub fn main(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Returns the cross-axis component of `point`.
    #[must_use]
    pub fn cross(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.x,
            Self::Horizontal => point.y,
        }
    }

    /// Returns the main-axis extent of `size`.
    #[must_use]
    pub fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Returns the cross-axis extent of `size`.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }

    /// Builds a point from main and cross components.
    #[must_use]
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }

    /// Builds a vector pointing along the main axis.
    #[must_use]
    pub fn main_vec(self, main: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, main),
            Self::Horizontal => Vec2::new(main, 0.0),
        }
    }

    /// Returns the inset before the first item along the main axis.
    #[must_use]
    pub fn leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.y0,
            Self::Horizontal => insets.x0,
        }
    }

    /// Returns the inset before the strip along the cross axis.
    #[must_use]
    pub fn cross_leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.x0,
            Self::Horizontal => insets.y0,
        }
    }
}

/// Geometry and behavior settings for a carousel.
///
/// `item_size`, `spacing`, `axis` and `insets` describe the strip the base
/// layout produces; the carousel reads them to size its transform window and
/// to compute paging targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Size of every item.
    pub item_size: Size,
    /// Gap between consecutive items along the main axis.
    pub spacing: f64,
    /// Snap the scroll-stop position to item boundaries.
    pub paging: bool,
    /// Scroll axis.
    pub axis: Axis,
    /// Section insets around the strip.
    pub insets: Insets,
}

impl LayoutConfig {
    /// Creates a vertical, paging configuration with no insets.
    #[must_use]
    pub fn new(item_size: Size, spacing: f64) -> Self {
        Self {
            item_size,
            spacing,
            paging: true,
            axis: Axis::Vertical,
            insets: Insets::ZERO,
        }
    }

    /// Sets whether paging is enabled.
    #[must_use]
    pub fn with_paging(mut self, paging: bool) -> Self {
        self.paging = paging;
        self
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the section insets.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Item extent along the scroll axis (the item "height" for vertical strips).
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.axis.main_extent(self.item_size)
    }

    /// Distance between the leading edges of consecutive items.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.item_extent() + self.spacing
    }

    /// Checks that every value is finite and that sizes are non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.item_size;
        if !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::NonFiniteItemSize);
        }
        if width < 0.0 || height < 0.0 {
            return Err(ConfigError::NegativeItemSize);
        }
        if !self.spacing.is_finite() {
            return Err(ConfigError::NonFiniteSpacing);
        }
        if self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing);
        }
        let Insets { x0, y0, x1, y1 } = self.insets;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFiniteInsets);
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(Size::ZERO, 0.0)
    }
}

/// Error returned when a [`LayoutConfig`] cannot be used.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The item size has a NaN or infinite component.
    NonFiniteItemSize,
    /// The item size has a negative component.
    NegativeItemSize,
    /// The spacing is NaN or infinite.
    NonFiniteSpacing,
    /// The spacing is negative.
    NegativeSpacing,
    /// One of the insets is NaN or infinite.
    NonFiniteInsets,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NonFiniteItemSize => "item size must be finite",
            Self::NegativeItemSize => "item size must not be negative",
            Self::NonFiniteSpacing => "item spacing must be finite",
            Self::NegativeSpacing => "item spacing must not be negative",
            Self::NonFiniteInsets => "section insets must be finite",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ConfigError {}
