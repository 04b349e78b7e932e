//! Criterion benchmarks for the three hull constructions.
//! Sizes: n in {100, 1_000, 10_000}; square clouds (h ~ log n) and
//! circle-heavy disks.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::hull::HullAlgo;
use planar::sample::{draw_points, PointCloudCfg, ReplayToken, Shape};

fn cloud(n: usize, shape: Shape, seed: u64) -> Vec<planar::Point> {
    let cfg = PointCloudCfg {
        count: n,
        shape,
        half_extent: 1.0,
    };
    draw_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hulls(c: &mut Criterion) {
    for (label, shape) in [("square", Shape::Square), ("disk", Shape::Disk)] {
        let mut group = c.benchmark_group(format!("hull_{label}"));
        for &n in &[100usize, 1_000, 10_000] {
            for algo in HullAlgo::ALL {
                group.bench_with_input(BenchmarkId::new(algo.to_string(), n), &n, |b, &n| {
                    b.iter_batched(
                        || cloud(n, shape, 41),
                        |pts| {
                            let _h = algo.compute(&pts);
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_hulls);
criterion_main!(benches);
