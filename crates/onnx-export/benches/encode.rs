// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for fixture construction and ONNX encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onnx_export::fixtures::int_types;

fn bench_build(c: &mut Criterion) {
    c.bench_function("int_types_build", |b| {
        b.iter(|| black_box(int_types::build().unwrap()));
    });
}

fn bench_encode(c: &mut Criterion) {
    let model = int_types::build().unwrap();
    c.bench_function("int_types_encode", |b| {
        b.iter(|| black_box(onnx_export::encode(&model)));
    });
}

criterion_group!(benches, bench_build, bench_encode);
criterion_main!(benches);
