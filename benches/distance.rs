use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use geovec::exact;
use geovec::kernel::{Point2, Segment2};
use geovec::prelude::*;

const COUNT: i64 = 256;

fn point(x: i64, y: i64) -> Point2 {
    Point2::new(exact::from_i64(x), exact::from_i64(y))
}

fn geometry() -> (AnyGeometry, AnyGeometry) {
    // Scatter points on a grid and connect neighbors with segments.
    let points = (0..COUNT)
        .map(|n| Some(point(n % 16, n / 16)))
        .collect::<GeometryVector<Point2>>();
    let segments = (0..COUNT)
        .map(|n| Some(Segment2::new(point(n, 0), point(n + 1, n % 7))))
        .collect::<GeometryVector<Segment2>>();
    (points.into(), segments.into())
}

fn distance_matrix((points, segments): (AnyGeometry, AnyGeometry)) {
    let _ = points.distance_matrix(&segments).unwrap();
}

fn do_intersect((points, segments): (AnyGeometry, AnyGeometry)) {
    let _ = segments.do_intersect(&points).unwrap();
}

fn benchmark(criterion: &mut Criterion) {
    criterion.bench_function("distance_matrix", move |bencher| {
        bencher.iter_batched(geometry, distance_matrix, BatchSize::SmallInput)
    });
    criterion.bench_function("do_intersect", move |bencher| {
        bencher.iter_batched(geometry, do_intersect, BatchSize::SmallInput)
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
