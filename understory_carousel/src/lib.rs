// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless carousel transforms for scrolling item strips.
//!
//! This crate takes items that a base layout has already positioned along one
//! scroll axis and turns the strip into a "carousel": items approaching the
//! leading edge of the viewport shrink and fade as one, and scroll-stop
//! offsets can snap to item boundaries. It also keeps a smoothing behavior
//! attached to every visible item in a host-provided physics engine, so
//! rendered positions can soften during fast scrolling or resizing.
//!
//! The pieces are:
//!
//! - [`intensity`]: the easing curve mapping a signed distance to `[0, 1]`.
//!   Scale and opacity both use it, so they always move in lockstep.
//! - [`VisibleItemTracker`]: set reconciliation of visible items against the
//!   behaviors attached in a [`SmoothingSimulation`].
//! - [`CarouselLayout`]: the per-pass driver that ties a base [`ItemLayout`],
//!   the tracker, and the transform together.
//! - [`FixedFlowLayout`]: a simple base layout for equally sized items.
//!
//! This crate deliberately does **not** render, step physics, or own list
//! data. Host frameworks are responsible for:
//!
//! - Supplying the viewport via [`CarouselLayout::set_viewport`] or
//!   [`CarouselLayout::on_bounds_change`].
//! - Calling [`CarouselLayout::prepare_pass`] before asking for attributes.
//! - Drawing items using [`ItemAttributes::transform`], `opacity`, and `z_index`.
//! - Stepping their own simulation between frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_carousel::{
//!     BehaviorId, CarouselLayout, FixedFlowLayout, ItemAttributes, LayoutConfig,
//!     ScrollViewport, SmoothingSimulation,
//! };
//!
//! // A host without physics can hand out dummy behaviors.
//! #[derive(Default)]
//! struct NoSmoothing(u64);
//!
//! impl SmoothingSimulation for NoSmoothing {
//!     fn create_behavior(&mut self, _: &ItemAttributes, _: Point) -> BehaviorId {
//!         self.0 += 1;
//!         BehaviorId::new(self.0)
//!     }
//!     fn remove_behavior(&mut self, _: BehaviorId) {}
//!     fn resync_behavior(&mut self, _: BehaviorId, _: &ItemAttributes) {}
//! }
//!
//! // 100 items, 100 logical pixels tall, 10 apart.
//! let config = LayoutConfig::new(Size::new(320.0, 100.0), 10.0);
//! let base = FixedFlowLayout::new(100, &config);
//! let mut carousel = CarouselLayout::new(base, NoSmoothing::default(), config);
//!
//! carousel.set_viewport(Some(ScrollViewport::new(
//!     Point::new(0.0, 250.0),
//!     Size::new(320.0, 480.0),
//! )));
//! carousel.prepare_pass();
//!
//! let visible = Rect::new(0.0, 250.0, 320.0, 730.0);
//! for item in carousel.attributes_for_rect(visible) {
//!     assert!((0.0..=1.0).contains(&item.opacity));
//! }
//!
//! // Paging: a drag ending at y = 235 comes to rest on item 2.
//! let target = carousel.snap_target(Point::new(0.0, 235.0), Vec2::ZERO);
//! assert_eq!(target.y, 220.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `tracing`: emit `tracing` events (target `understory_carousel`) for
//!   layout passes, resets, and bounds changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_carousel requires either the `std` or `libm` feature");

#[macro_use]
mod macros;

mod attributes;
mod carousel;
mod config;
mod intensity;
mod layout;
mod simulation;
mod tracker;

pub use attributes::{ItemAttributes, ItemId, ItemTransform};
pub use carousel::{CarouselDebugInfo, CarouselLayout};
pub use config::{Axis, ConfigError, LayoutConfig};
pub use intensity::intensity;
pub use layout::{FixedFlowLayout, ItemLayout, ScrollViewport};
pub use simulation::{BehaviorId, SmoothingSimulation};
pub use tracker::{ReconcileSummary, VisibleItemTracker};
