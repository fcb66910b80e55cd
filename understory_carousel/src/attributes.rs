// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout attributes and the carousel transform applied to them.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Stable identifier of an item: its index into the host's list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Returns the list index this identifier refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ItemId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Translation plus uniform scale, expressed relative to the item's center.
///
/// The translation is applied first and the scale second, so the item is
/// moved to its new position and then scaled about that position. The scale
/// factor applies uniformly to x, y, and z; the z translation is always zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemTransform {
    /// Offset of the item's center, in layout units.
    pub translation: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ItemTransform {
    /// The transform that leaves an item untouched.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns `true` if this transform leaves the item untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns the 2D affine equivalent, in the item's center-relative space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Returns the transform as a column-major 4x4 matrix.
    ///
    /// This is the layout expected by most 3D-capable compositors: the
    /// diagonal carries the scale in x, y, and z, and the last column carries
    /// the translation.
    #[must_use]
    pub fn to_matrix(&self) -> [f64; 16] {
        let s = self.scale;
        let Vec2 { x, y } = self.translation;
        [
            s, 0.0, 0.0, 0.0, //
            0.0, s, 0.0, 0.0, //
            0.0, 0.0, s, 0.0, //
            x, y, 0.0, 1.0,
        ]
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Layout attributes for one item.
///
/// Base layouts produce these with an identity transform, full opacity, and a
/// zero stacking order; the carousel then rewrites the last three fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemAttributes {
    /// Which item these attributes describe.
    pub id: ItemId,
    /// Center of the item in content coordinates.
    pub center: Point,
    /// Untransformed size of the item.
    pub size: Size,
    /// Visual transform applied on top of `center`/`size`.
    pub transform: ItemTransform,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order; higher values draw above lower ones.
    pub z_index: i64,
}

impl ItemAttributes {
    /// Creates untransformed attributes for an item centered at `center`.
    #[must_use]
    pub fn new(id: ItemId, center: Point, size: Size) -> Self {
        Self {
            id,
            center,
            size,
            transform: ItemTransform::IDENTITY,
            opacity: 1.0,
            z_index: 0,
        }
    }

    /// Returns the untransformed frame of the item.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Returns the frame after the transform has been applied.
    #[must_use]
    pub fn transformed_frame(&self) -> Rect {
        let center = self.center + self.transform.translation;
        Rect::from_center_size(center, self.size * self.transform.scale)
    }

    /// Resets the transform and opacity; the stacking order is kept.
    pub fn clear_transform(&mut self) {
        self.transform = ItemTransform::IDENTITY;
        self.opacity = 1.0;
    }
}
