// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use loupe_preview::{PointerInput, PreviewController};

// Replays a full mouse drag (down, N moves, up) through the controller, the
// way a host's event loop would deliver it.
fn bench_drag_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview/drag_replay");

    for moves in [16_usize, 256, 4_096] {
        let path: Vec<Point> = (0..moves)
            .map(|i| {
                let t = i as f64;
                Point::new(400.0 - t * 0.75, 300.0 + (t * 0.1).sin() * 40.0)
            })
            .collect();
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::from_parameter(moves), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut preview = PreviewController::new(Size::new(800.0, 600.0), ());
                    preview.replace_image();
                    preview.image_loaded(Size::new(2400.0, 1600.0));
                    preview
                },
                |mut preview| {
                    preview.handle_input(PointerInput::MouseDown(Point::new(400.0, 300.0)));
                    for &p in path {
                        black_box(preview.handle_input(PointerInput::MouseMove(p)));
                    }
                    preview.handle_input(PointerInput::MouseUp);
                    black_box(preview);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_replay);
criterion_main!(benches);
