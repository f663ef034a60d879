use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatforest::{filter, FlatHierarchy};

/// Forest of identical eight-node chains: depth cycles through 0..=7.
fn make_chain_forest(size: usize) -> FlatHierarchy {
    let mut ids = Vec::with_capacity(size);
    let mut depths = Vec::with_capacity(size);

    for i in 0..size {
        ids.push(i as i64);
        depths.push((i % 8) as i64);
    }

    FlatHierarchy::new(ids, depths).unwrap()
}

fn bench_make_forest(c: &mut Criterion) {
    let mut g = c.benchmark_group("forest creation");

    for size in [0, 100, 10_000, 1_000_000] {
        g.bench_with_input(
            BenchmarkId::new("make_chain_forest", size),
            &size,
            |b, size| b.iter(|| black_box(make_chain_forest(*size))),
        );
    }
}

fn bench_filter_forest(c: &mut Criterion) {
    let mut g = c.benchmark_group("forest filtering");

    for size in [0, 100, 10_000, 1_000_000] {
        g.bench_with_input(
            BenchmarkId::new("filter_chain_forest", size),
            &size,
            |b, size| {
                let forest = make_chain_forest(*size);
                b.iter(|| black_box(filter(&forest, |id| id % 3 != 0)))
            },
        );
    }
}

criterion_group!(benches, bench_make_forest, bench_filter_forest);
criterion_main!(benches);
