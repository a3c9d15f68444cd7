//! Criterion benchmarks for the branch-and-cut search.
//!
//! Uses seeded random graphs so every run explores the same trees.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_maxclique::bnc::{BncConfig, BncRunner};
use u_maxclique::coloring::{greedy_coloring, ColoringOrder};
use u_maxclique::graph::generate;

fn bench_bnc_gnp(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnc_gnp_p05");
    group.sample_size(10);

    for n in [15, 25, 35] {
        let graph = generate::gnp(n, 0.5, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| BncRunner::run_with_simplex(black_box(g), &BncConfig::default()))
        });
    }
    group.finish();
}

fn bench_cuts_vs_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnc_planted");
    group.sample_size(10);

    let (graph, _) = generate::planted_clique(30, 0.3, 8, 7);
    for (label, cuts) in [("cuts", true), ("plain", false)] {
        let config = BncConfig::default().with_cutting_planes(cuts);
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, cfg| {
            b.iter(|| BncRunner::run_with_simplex(black_box(&graph), cfg))
        });
    }
    group.finish();
}

fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_coloring");

    for n in [100, 400] {
        let graph = generate::gnp(n, 0.3, 1);
        let all: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| greedy_coloring(black_box(g), &all, ColoringOrder::DegreeDescending))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bnc_gnp, bench_cuts_vs_plain, bench_coloring);
criterion_main!(benches);
