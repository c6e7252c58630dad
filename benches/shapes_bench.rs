#![deny(warnings)]
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use drawing::{
    Checkerboard, Circle, ColorCyclingCircle, Flower, Rect, Shape, Spirograph, interpolate,
};
use std::hint::black_box;

fn shapes_benchmark(c: &mut Criterion) {
    let rect = Rect::new(0.0, 0.0, 400.0, 400.0);

    let mut group = c.benchmark_group("shapes");
    group.throughput(Throughput::Elements(1));

    let spirograph = Spirograph::new(124, 75, 25.0, 1.0);
    group.bench_function("spirograph-coprime", |b| {
        b.iter_with_large_drop(|| spirograph.path(black_box(rect)))
    });

    let flower = Flower::default();
    group.bench_function("flower", |b| {
        b.iter_with_large_drop(|| flower.path(black_box(rect)))
    });

    let checkerboard = Checkerboard::new(16, 16);
    group.bench_function("checkerboard-16x16", |b| {
        b.iter_with_large_drop(|| checkerboard.path(black_box(rect)))
    });

    let rings = ColorCyclingCircle::new(Circle::default(), 0.5);
    group.bench_function("color-cycling-rings", |b| {
        b.iter_with_large_drop(|| rings.rings(black_box(rect)))
    });
    group.finish();
}

fn animation_benchmark(c: &mut Criterion) {
    let from = Spirograph::new(124, 75, 10.0, 0.0);
    let to = Spirograph::new(124, 75, 40.0, 1.0);
    c.bench_function("interpolate-spirograph", |b| {
        b.iter(|| interpolate(&from, &to, black_box(0.37)))
    });
}

fn svg_benchmark(c: &mut Criterion) {
    let path = Spirograph::new(124, 75, 25.0, 1.0).path(Rect::new(0.0, 0.0, 400.0, 400.0));
    let mut group = c.benchmark_group("svg");
    group.throughput(Throughput::Elements(path.vertices().len() as u64));
    group.bench_function("spirograph-to-svg", |b| {
        b.iter_with_large_drop(|| black_box(&path).to_svg_path())
    });
    group.finish();
}

criterion_group!(benches, shapes_benchmark, animation_benchmark, svg_benchmark);
criterion_main!(benches);
