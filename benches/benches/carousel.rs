// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_carousel::{
    BehaviorId, CarouselLayout, FixedFlowLayout, ItemAttributes, ItemLayout, LayoutConfig,
    ScrollViewport, SmoothingSimulation, VisibleItemTracker, intensity,
};

#[derive(Default)]
struct Handles(u64);

impl SmoothingSimulation for Handles {
    fn create_behavior(&mut self, _item: &ItemAttributes, _anchor: Point) -> BehaviorId {
        self.0 += 1;
        BehaviorId::new(self.0)
    }

    fn remove_behavior(&mut self, _id: BehaviorId) {}

    fn resync_behavior(&mut self, _id: BehaviorId, _item: &ItemAttributes) {}
}

fn bench_intensity(c: &mut Criterion) {
    c.bench_function("carousel/intensity", |b| {
        let mut d = -600.0;
        b.iter(|| {
            d = if d > 100.0 { -600.0 } else { d + 0.5 };
            black_box(intensity(black_box(d), -500.0, 50.0))
        });
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/reconcile");

    // Each step scrolls by a quarter of the window, so most items survive.
    for window in [8usize, 64, 512] {
        let config = LayoutConfig::new(Size::new(100.0, 10.0), 0.0);
        let layout = FixedFlowLayout::new(window * 64, &config);
        let frames: Vec<Vec<ItemAttributes>> = (0..64)
            .map(|step| {
                let y = (step * window / 4 * 10) as f64;
                layout.attributes_in_rect(Rect::new(0.0, y, 100.0, y + (window * 10) as f64))
            })
            .collect();
        group.throughput(Throughput::Elements(window as u64));

        group.bench_with_input(BenchmarkId::from_parameter(window), &frames, |b, frames| {
            let mut tracker = VisibleItemTracker::new();
            let mut sim = Handles::default();
            let mut i = 0;
            b.iter(|| {
                let summary = tracker.reconcile(&frames[i % frames.len()], &mut sim);
                i += 1;
                black_box(summary)
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/frame");

    for visible in [8usize, 64] {
        let config = LayoutConfig::new(Size::new(320.0, 100.0), 10.0);
        let base = FixedFlowLayout::new(10_000, &config);
        let mut carousel = CarouselLayout::new(base, Handles::default(), config);
        let height = visible as f64 * config.pitch();
        carousel.set_viewport(Some(ScrollViewport::new(
            Point::ZERO,
            Size::new(320.0, height),
        )));
        group.throughput(Throughput::Elements(visible as u64));

        group.bench_function(BenchmarkId::from_parameter(visible), |b| {
            let mut y = 0.0;
            b.iter(|| {
                y = if y > 500_000.0 { 0.0 } else { y + 37.0 };
                carousel.set_scroll_offset(Point::new(0.0, y));
                carousel.prepare_pass();
                let rect = Rect::new(0.0, y, 320.0, y + height);
                black_box(carousel.attributes_for_rect(rect))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intensity, bench_reconcile, bench_frame);
criterion_main!(benches);
