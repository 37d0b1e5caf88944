// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strided traversal micro-benchmarks: the position-based view against the
//! plain iterator adapter over the same data.

use core::num::NonZeroUsize;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use striding_view::{StrideByExt, StridedExt};

const LEN: usize = 100_000;
const STEP: usize = 7;

fn view_sum(c: &mut Criterion) {
    let data: Vec<u64> = (0..LEN as u64).collect();
    let step = NonZeroUsize::new(STEP).unwrap();
    c.bench_function("view_sum", |b| {
        b.iter(|| {
            let view = black_box(data.as_slice()).strided(step);
            view.iter().copied().sum::<u64>()
        });
    });
}

fn iterator_sum(c: &mut Criterion) {
    let data: Vec<u64> = (0..LEN as u64).collect();
    let step = NonZeroUsize::new(STEP).unwrap();
    c.bench_function("iterator_sum", |b| {
        b.iter(|| black_box(data.iter()).stride_by(step).copied().sum::<u64>());
    });
}

fn view_reverse_sum(c: &mut Criterion) {
    let data: Vec<u64> = (0..LEN as u64).collect();
    let step = NonZeroUsize::new(STEP).unwrap();
    c.bench_function("view_reverse_sum", |b| {
        b.iter(|| {
            let view = black_box(data.as_slice()).strided(step);
            view.iter().rev().copied().sum::<u64>()
        });
    });
}

criterion_group!(benches, view_sum, iterator_sum, view_reverse_sum);
criterion_main!(benches);
