//! Benchmark for town generation.
//!
//! TARGET: a full 5 + 30 + 120 town in well under a millisecond
//!
//! Run with: cargo bench --package agenttown_procedural --bench world_benchmark

#![allow(missing_docs)]

use agenttown_procedural::geometry::{is_near_river, is_on_road};
use agenttown_procedural::{WorldBuilder, WorldSeed};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_full_world(c: &mut Criterion) {
    let builder = WorldBuilder::default();

    c.bench_function("generate_world", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(builder.build(&mut WorldSeed::new(seed).rng()))
        });
    });
}

fn benchmark_geometry_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("corridor_checks_10k", |b| {
        b.iter(|| {
            let mut blocked = 0u32;
            for i in 0..10_000u32 {
                let x = f64::from(i % 100) * 24.0;
                let y = f64::from(i / 100) * 28.0;
                if is_near_river(black_box(x), black_box(y), 360.0) || is_on_road(x, y, 90.0) {
                    blocked += 1;
                }
            }
            black_box(blocked)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_full_world, benchmark_geometry_predicates);
criterion_main!(benches);
