// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use loupe_view::{ViewportState, ZoomFactor, geometry};

fn bench_bounds_and_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/bounds_clamp");

    let container = Size::new(1280.0, 720.0);
    let natural = Size::new(4000.0, 3000.0);
    for factor in [1_u32, 4, 16] {
        let zoom = ZoomFactor::new(factor).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(factor), &zoom, |b, &zoom| {
            b.iter(|| {
                let bounds = geometry::bounds(black_box(container), black_box(natural), zoom);
                black_box(bounds.clamp(black_box(Vec2::new(-2500.0, 90.0))))
            });
        });
    }

    group.finish();
}

fn bench_recenter(c: &mut Criterion) {
    let container = Size::new(800.0, 600.0);
    let mut view = ViewportState::new();
    view.set_natural_size(Some(Size::new(300.0, 900.0)));
    view.set_zoom(ZoomFactor::new(2).unwrap());

    c.bench_function("viewport/recenter_or_clamp_if_smaller", |b| {
        b.iter(|| black_box(view.recenter_or_clamp_if_smaller(black_box(container))));
    });
}

criterion_group!(benches, bench_bounds_and_clamp, bench_recenter);
criterion_main!(benches);
