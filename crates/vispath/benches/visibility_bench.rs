//! Criterion benchmarks for state space construction.
//! Focus sizes: grids of {2x2, 4x4, 6x6, 8x8} cells, fill 0.7.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p vispath

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use vispath::prelude::*;

fn field(side: usize, index: u64) -> ObstacleField {
    let cfg = FieldCfg {
        cols: side,
        rows: side,
        ..FieldCfg::default()
    };
    draw_obstacle_field(cfg, ReplayToken { seed: 41, index })
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    for &side in &[2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("build_state_space", side), &side, |b, &side| {
            b.iter_batched(
                || field(side, 0),
                |f| {
                    let _space = build_state_space(&f.polygons, f.start, f.goal).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("boundary_only", side), &side, |b, &side| {
            let cfg = BuildCfg {
                visibility: false,
                ..BuildCfg::default()
            };
            b.iter_batched(
                || field(side, 1),
                |f| {
                    let mut builder = StateSpaceBuilder::new(cfg);
                    builder.start("S", f.start).unwrap();
                    for (i, p) in f.polygons.into_iter().enumerate() {
                        builder.add_polygon(format!("P{i}"), p).unwrap();
                    }
                    builder.goal("G", f.goal).unwrap();
                    let _space = builder.build().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visibility);
criterion_main!(benches);
