//! Criterion benchmarks: chain-search containment vs the half-plane scan.
//! Focus sizes: n vertices in {16, 128, 1024, 8192}, 1024 queries per run.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monochain::prelude::*;

const SCALE: f64 = 500_000.0;

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for &n in &[16usize, 128, 1024, 8192] {
        let ring = draw_convex_ring_radial(
            n,
            SCALE,
            ReplayToken {
                seed: 7,
                index: n as u64,
            },
        );
        let queries = draw_points_uniform(
            1024,
            SCALE,
            ReplayToken {
                seed: 8,
                index: n as u64,
            },
        );
        let poly = ConvexPolygon::new(&ring).expect("convex ring");
        let oracle = HalfPlaneOracle::new(&ring);

        group.bench_with_input(BenchmarkId::new("chain_search", n), &n, |b, _| {
            b.iter(|| queries.iter().filter(|&&q| poly.contains(q)).count())
        });

        group.bench_with_input(BenchmarkId::new("half_plane_scan", n), &n, |b, _| {
            b.iter(|| queries.iter().filter(|&&q| oracle.contains(q)).count())
        });
    }
    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    for &n in &[128usize, 8192] {
        let ring = draw_convex_ring_radial(
            n,
            SCALE,
            ReplayToken {
                seed: 9,
                index: n as u64,
            },
        );
        group.bench_with_input(BenchmarkId::new("construct", n), &n, |b, _| {
            b.iter(|| ConvexPolygon::new(&ring).expect("convex ring"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_preprocess);
criterion_main!(benches);
