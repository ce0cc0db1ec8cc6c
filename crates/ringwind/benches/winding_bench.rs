//! Criterion benchmarks for the winding classifier.
//! Ring sizes: n in {4, 16, 64, 256}.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use ringwind::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use ringwind::Winding;

fn ring(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_ring_radial(cfg, ReplayToken { seed, index: 0 })
}

fn bench_winding(c: &mut Criterion) {
    let mut group = c.benchmark_group("winding");
    let cartesian = Winding::cartesian();
    let spherical = Winding::spherical_degrees();
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("classify_cartesian", n), &n, |b, &n| {
            b.iter_batched(
                || ring(n, 43),
                |ring| {
                    let _loc = cartesian.classify(Vector2::new(0.1, -0.2), &ring);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("classify_spherical", n), &n, |b, &n| {
            b.iter_batched(
                // Reuse the planar sampler; a unit-radius ring is a valid
                // (small) lon/lat ring near the origin.
                || ring(n, 44),
                |ring| {
                    let _loc = spherical.classify(Vector2::new(0.1, -0.2), &ring);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_winding);
criterion_main!(benches);
