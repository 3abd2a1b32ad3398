//! Dense graph algorithm benchmarks.
//!
//! Compares the two labeling strategies, which dominate the cost of every
//! Borůvka round, on random connected symmetric matrices.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use densegraph::{
    build_mst_with_config, label_components_with_config, reachable_from, AdjacencyMatrix,
    AdjacencyMatrixBuilder, LabelConfig, LabelStrategy, MstConfig, NodeId,
};

const SIZES: [usize; 3] = [32, 64, 128];

fn random_connected(n: usize, seed: u64) -> AdjacencyMatrix<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = AdjacencyMatrixBuilder::new(n, 0);
    for v in 1..n as u32 {
        let parent = rng.gen_range(0..v);
        builder.add_undirected_edge(parent, v, rng.gen_range(1..1000));
    }
    for _ in 0..n * 4 {
        let a = rng.gen_range(0..n as u32);
        let b = rng.gen_range(0..n as u32);
        if a != b {
            builder.add_undirected_edge(a, b, rng.gen_range(1..1000));
        }
    }
    builder.build().expect("benchmark graph")
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");

    for n in SIZES {
        let graph = random_connected(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(reachable_from(NodeId(0), black_box(g)).unwrap()));
        });
    }

    group.finish();
}

fn bench_labeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("labeling");

    for n in SIZES {
        let graph = random_connected(n, 2);
        for strategy in [LabelStrategy::Reachability, LabelStrategy::UnionFind] {
            let config = LabelConfig::new().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), n),
                &graph,
                |b, g| b.iter(|| black_box(label_components_with_config(g, &config).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_boruvka(c: &mut Criterion) {
    let mut group = c.benchmark_group("boruvka");
    group.sample_size(20);

    for n in SIZES {
        let graph = random_connected(n, 3);
        for strategy in [LabelStrategy::Reachability, LabelStrategy::UnionFind] {
            let config = MstConfig::new().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), n),
                &graph,
                |b, g| b.iter(|| black_box(build_mst_with_config(g, &config).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_reachability, bench_labeling, bench_boruvka);
criterion_main!(benches);
