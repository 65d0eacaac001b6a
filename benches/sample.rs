use swiftrand::{BigUint, Csprng};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_u64_below(c: &mut Criterion) {
    let mut rng = Csprng::new();

    c.bench_function("u64_below 1000", |b| {
        b.iter(|| rng.u64_below(black_box(1000)))
    });

    // Worst case for rejection: about half of all draws are discarded.
    c.bench_function("u64_below 2^63 + 1", |b| {
        b.iter(|| rng.u64_below(black_box((1 << 63) + 1)))
    });
}

pub fn bench_biguint_below(c: &mut Criterion) {
    let mut rng = Csprng::new();
    let n = (BigUint::from(1u32) << 255u32) + BigUint::from(19u32);

    c.bench_function("biguint_below 256-bit", |b| {
        b.iter(|| rng.biguint_below(black_box(&n)))
    });
}

pub fn bench_permutation(c: &mut Criterion) {
    let mut rng = Csprng::new();

    c.bench_function("permutation 1000", |b| {
        b.iter(|| rng.permutation(black_box(1000)))
    });
}

criterion_group!(benches, bench_u64_below, bench_biguint_below, bench_permutation);
criterion_main!(benches);
