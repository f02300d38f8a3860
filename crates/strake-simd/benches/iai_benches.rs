//! iai-callgrind benchmarks for strake-simd
//!
//! Measures instruction counts (deterministic, cachegrind-based). The chain
//! group is the empirical check of the round-trip elision contract: the
//! instruction count of `bench_chain5` must stay far below five times
//! `bench_chain1`, and its memory reads/writes must match a single
//! load/store of the backing storage rather than five. A regression here
//! means an operation lost its inlining or stopped using the shared
//! all-active lane bound.
//!
//! Run with: cargo bench --bench iai_benches

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use strake_simd::{DefaultSimdVector, SimdVector};

// Arithmetic operations

#[library_benchmark]
fn bench_add() -> DefaultSimdVector {
    let a = black_box(DefaultSimdVector::splat(2.0));
    let b = black_box(DefaultSimdVector::splat(3.0));
    black_box(a.add(b))
}

#[library_benchmark]
fn bench_mul() -> DefaultSimdVector {
    let a = black_box(DefaultSimdVector::splat(2.0));
    let b = black_box(DefaultSimdVector::splat(3.0));
    black_box(a.mul(b))
}

#[library_benchmark]
fn bench_fma() -> DefaultSimdVector {
    let a = black_box(DefaultSimdVector::splat(2.0));
    let b = black_box(DefaultSimdVector::splat(3.0));
    let c = black_box(DefaultSimdVector::splat(1.0));
    black_box(a.fma(b, c))
}

// Memory operations

#[library_benchmark]
fn bench_from_slice() -> DefaultSimdVector {
    let data = black_box([1.0f32; DefaultSimdVector::MAX_LANES]);
    black_box(DefaultSimdVector::from_slice(&data))
}

#[library_benchmark]
fn bench_to_slice() -> [f32; DefaultSimdVector::MAX_LANES] {
    let v = black_box(DefaultSimdVector::splat(2.0));
    let mut output = black_box([0.0f32; DefaultSimdVector::MAX_LANES]);
    v.to_slice(&mut output);
    black_box(output)
}

// Chained operations: the elision regression check

#[library_benchmark]
fn bench_chain1() -> DefaultSimdVector {
    let v = black_box(DefaultSimdVector::splat(1.7));
    let two = black_box(DefaultSimdVector::splat(2.0));
    black_box(v.mul(two))
}

#[library_benchmark]
fn bench_chain5() -> DefaultSimdVector {
    let v = black_box(DefaultSimdVector::splat(1.7));
    let two = black_box(DefaultSimdVector::splat(2.0));
    let one = black_box(DefaultSimdVector::splat(1.0));
    let cap = black_box(DefaultSimdVector::splat(100.0));
    black_box(v.mul(two).add(one).abs().min(cap).floor())
}

// Reductions

#[library_benchmark]
fn bench_horizontal_sum() -> f32 {
    let v = black_box(DefaultSimdVector::splat(2.0));
    black_box(v.horizontal_sum())
}

library_benchmark_group!(
    name = arithmetic_group;
    benchmarks = bench_add, bench_mul, bench_fma
);

library_benchmark_group!(
    name = memory_group;
    benchmarks = bench_from_slice, bench_to_slice
);

library_benchmark_group!(
    name = chain_group;
    benchmarks = bench_chain1, bench_chain5
);

library_benchmark_group!(
    name = horizontal_group;
    benchmarks = bench_horizontal_sum
);

main!(
    library_benchmark_groups = arithmetic_group,
    memory_group,
    chain_group,
    horizontal_group
);
