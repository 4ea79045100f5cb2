// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use gyre_engine::{Carousel, CarouselConfig, PointerKind};
use gyre_strip::SlideSequence;
use kurbo::Point;

fn ready_carousel(sources: &[&'static str]) -> Carousel<&'static str> {
    let mut carousel = Carousel::new(
        CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        },
        sources,
        0,
    );
    for _ in 0..3 {
        carousel.media_settled(0);
    }
    carousel.measured(Some(640.0), None, 0);
    carousel.take_damage();
    carousel
}

fn bench_sequence_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip/build");

    for len in [4usize, 16, 64, 256] {
        let sources: Vec<String> = (0..len).map(|i| format!("slide-{i}.jpg")).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &sources, |b, sources| {
            b.iter(|| black_box(SlideSequence::build(sources)));
        });
    }

    group.finish();
}

fn bench_advance_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/advance_cycle");
    let sources = ["a", "b", "c", "d", "e"];

    // One full advance→completion cycle, including the wrap teleports that
    // come up every fifth step.
    group.bench_function("next_and_settle", |b| {
        b.iter_batched(
            || ready_carousel(&sources),
            |mut carousel| {
                let mut now = 1_000;
                for _ in 0..32 {
                    carousel.next(now);
                    now += 500;
                    carousel.tick(now);
                    black_box(carousel.take_damage());
                }
                black_box(carousel.real_index());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/drag_stream");
    let sources = ["a", "b", "c"];

    // A 120-sample gesture: the per-move cost dominates real sessions.
    group.throughput(Throughput::Elements(120));
    group.bench_function("move_samples", |b| {
        b.iter_batched(
            || ready_carousel(&sources),
            |mut carousel| {
                carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 1_000);
                for i in 0..120 {
                    let x = 500.0 - f64::from(i);
                    black_box(carousel.pointer_move(Point::new(x, 0.0)));
                }
                carousel.pointer_up(Point::new(380.0, 0.0), 2_000);
                carousel.tick(2_500);
                black_box(carousel.take_damage());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sequence_build,
    bench_advance_cycle,
    bench_drag_stream
);
criterion_main!(benches);
