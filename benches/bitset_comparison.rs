//! Comparison benchmarks: BitSet vs `bitvec::BitVec`.
//!
//! Measures the word-level paths (range fill, population count, set algebra,
//! iteration) against the equivalent `bitvec` operations on the same bits.

use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynbitset::BitSet;
use rand::{Rng, SeedableRng};

// Standard test configuration
const SIZE_STANDARD: usize = 4096;
const ACTIVATION_PCT: f64 = 0.1;
const SEED: u64 = 42;

fn random_pair(seed: u64) -> (BitSet, BitVec<u16, Lsb0>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut bs = BitSet::with_capacity(SIZE_STANDARD);
    let mut bv = BitVec::repeat(false, SIZE_STANDARD);
    for b in 0..SIZE_STANDARD {
        if rng.gen_bool(ACTIVATION_PCT) {
            bs.set_bit(b);
            bv.set(b, true);
        }
    }
    (bs, bv)
}

fn bench_set_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_range");

    group.bench_function("dynbitset", |b| {
        let mut bs = BitSet::with_capacity(SIZE_STANDARD);
        b.iter(|| bs.set_range(black_box(5), black_box(SIZE_STANDARD - 5)).unwrap());
    });

    group.bench_function("bitvec", |b| {
        let mut bv: BitVec<u16, Lsb0> = BitVec::repeat(false, SIZE_STANDARD);
        b.iter(|| bv[black_box(5)..black_box(SIZE_STANDARD - 5)].fill(true));
    });

    group.finish();
}

fn bench_cardinality(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardinality");
    let (bs, bv) = random_pair(SEED);

    group.bench_function("dynbitset", |b| b.iter(|| black_box(bs.cardinality())));
    group.bench_function("bitvec", |b| b.iter(|| black_box(bv.count_ones())));

    group.finish();
}

fn bench_and(c: &mut Criterion) {
    let mut group = c.benchmark_group("and");
    let (bs1, bv1) = random_pair(SEED);
    let (bs2, bv2) = random_pair(SEED + 1);

    group.bench_function("dynbitset", |b| b.iter(|| black_box(&bs1 & &bs2)));
    group.bench_function("bitvec", |b| {
        b.iter(|| black_box(bv1.clone() & bv2.as_bitslice()))
    });

    group.finish();
}

fn bench_iter_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_ones");
    let (bs, bv) = random_pair(SEED);

    group.bench_function("dynbitset", |b| {
        b.iter(|| black_box(bs.iter().sum::<usize>()))
    });
    group.bench_function("bitvec", |b| {
        b.iter(|| black_box(bv.iter_ones().sum::<usize>()))
    });

    group.finish();
}

fn bench_next_set_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_set_bit");
    let bs = BitSet::from_indices([SIZE_STANDARD - 1]);
    let mut bv: BitVec<u16, Lsb0> = BitVec::repeat(false, SIZE_STANDARD);
    bv.set(SIZE_STANDARD - 1, true);

    group.bench_function("dynbitset", |b| {
        b.iter(|| black_box(bs.next_set_bit(black_box(0))))
    });
    group.bench_function("bitvec", |b| {
        b.iter(|| black_box(bv[black_box(0)..].first_one()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set_range,
    bench_cardinality,
    bench_and,
    bench_iter_ones,
    bench_next_set_bit
);

criterion_main!(benches);
