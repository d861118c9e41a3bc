use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rice_fenwick::prelude::*;
use std::hint::black_box;

const BOUND: u64 = 64;
const N: usize = 1 << 20;

fn bench_tree<T: FenwickTree>(c: &mut Criterion, name: &str, mut tree: T) {
    let mut r = SmallRng::seed_from_u64(0);
    let total = tree.prefix(N);

    c.bench_function(&format!("{name}::prefix"), |b| {
        b.iter(|| black_box(tree.prefix(r.random_range(0..=N))))
    });

    c.bench_function(&format!("{name}::find"), |b| {
        b.iter(|| black_box(tree.find(r.random_range(0..total))))
    });

    c.bench_function(&format!("{name}::add"), |b| {
        b.iter(|| {
            let idx = r.random_range(1..=N);
            tree.add(idx, 1);
            tree.add(idx, -1);
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(1);
    let elements: Vec<u64> = (0..N).map(|_| r.random_range(0..BOUND)).collect();

    bench_tree(c, "FixedF", FixedF::<BOUND>::new(&elements));
    bench_tree(c, "FixedL", FixedL::<BOUND>::new(&elements));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
