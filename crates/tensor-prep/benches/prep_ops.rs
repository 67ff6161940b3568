// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the preprocessing and scoring hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tensor_prep::{normalize, scoring, INPUT_HEIGHT, INPUT_WIDTH};

fn bench_normalize(c: &mut Criterion) {
    let img = image::RgbImage::from_pixel(INPUT_WIDTH, INPUT_HEIGHT, image::Rgb([120, 64, 200]));
    c.bench_function("normalize_224", |b| {
        b.iter(|| normalize::to_model_input(black_box(&img)).unwrap())
    });
}

fn bench_softmax(c: &mut Criterion) {
    let logits: Vec<f32> = (0..1000).map(|i| (i % 97) as f32 * 0.1).collect();
    c.bench_function("softmax_1000", |b| {
        b.iter(|| scoring::softmax(black_box(&logits)))
    });
}

criterion_group!(benches, bench_normalize, bench_softmax);
criterion_main!(benches);
