// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

mod linked_list_seq;
mod strqueue_seq;
mod vec_deque_seq;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

pub trait Sequence: Sized + 'static {
    const NAME: &'static str;

    fn new() -> Self;

    fn push_back(&mut self, value: &str);

    fn push_front(&mut self, value: &str);

    fn pop_front(&mut self) -> Option<String>;

    fn reverse(&mut self);

    fn sort(&mut self);
}

fn xorshift(prng: &mut u64) -> u64 {
    *prng ^= *prng << 13;
    *prng ^= *prng >> 7;
    *prng ^= *prng << 17;
    *prng
}

fn values(count: usize) -> Vec<String> {
    let mut prng = 0x9E3779B97F4A7C15u64;
    (0..count)
        .map(|_| format!("{:016x}", xorshift(&mut prng)))
        .collect()
}

fn filled<S: Sequence>(values: &[String]) -> S {
    let mut seq = S::new();
    for value in values {
        seq.push_back(value);
    }
    seq
}

fn bench_sequence<S: Sequence>(c: &mut Criterion) {
    let mut group = c.benchmark_group(S::NAME);

    for &size in SIZES.iter() {
        let values = values(size);

        group.bench_with_input(BenchmarkId::new("push_pop", size), &values, |b, values| {
            b.iter(|| {
                let mut seq = S::new();
                for (i, value) in values.iter().enumerate() {
                    if i & 1 == 0 {
                        seq.push_back(value);
                    } else {
                        seq.push_front(value);
                    }
                }
                while let Some(value) = seq.pop_front() {
                    black_box(value);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("reverse", size), &values, |b, values| {
            b.iter_batched_ref(
                || filled::<S>(values),
                |seq| seq.reverse(),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort", size), &values, |b, values| {
            b.iter_batched_ref(
                || filled::<S>(values),
                |seq| seq.sort(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_all(c: &mut Criterion) {
    bench_sequence::<strqueue_seq::Seq>(c);
    bench_sequence::<vec_deque_seq::Seq>(c);
    bench_sequence::<linked_list_seq::Seq>(c);
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
