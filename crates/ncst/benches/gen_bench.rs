//! Criterion microbenches for the random graph generators.
//!
//! - Unit-square scatter at 30 and 120 vertices.
//! - Convex polygon with chords at 12 and 48 vertices.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ncst::api::{
    draw_convex_polygon_graph, draw_random_graph, ConvexPolygonCfg, RandomGraphCfg, ReplayToken,
};

fn bench_random_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_random");
    for &(n, m) in &[(30usize, 120usize), (120, 480)] {
        let cfg = RandomGraphCfg {
            vertices: n,
            edges: m,
            ..RandomGraphCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("draw_random_graph", n), &cfg, |b, cfg| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = draw_random_graph(*cfg, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_convex_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_convex");
    for &n in &[12usize, 48] {
        let cfg = ConvexPolygonCfg {
            vertices: n,
            chords: n,
            ..ConvexPolygonCfg::default()
        };
        group.bench_with_input(
            BenchmarkId::new("draw_convex_polygon_graph", n),
            &cfg,
            |b, cfg| {
                b.iter_batched(
                    || ReplayToken { seed: 7, index: 3 },
                    |tok| {
                        let _ = draw_convex_polygon_graph(*cfg, tok);
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_random_graph, bench_convex_polygon);
criterion_main!(benches);
