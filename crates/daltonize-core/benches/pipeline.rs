//! Benchmarks for daltonize-core transform operations
//!
//! Run with: cargo bench -p daltonize-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use daltonize_core::buffer::Frame;
use daltonize_core::models::lookup;
use daltonize_core::pipeline::{correct_frame, simulate_frame};

/// Generate synthetic gradient frame data
fn generate_test_frame(width: u32, height: u32) -> Frame {
    let pixel_count = (width * height) as usize;
    let mut data = Vec::with_capacity(pixel_count * 3);

    for i in 0..pixel_count {
        let x = (i % width as usize) as f32 / width as f32;
        let y = (i / width as usize) as f32 / height as f32;

        data.push(x);
        data.push(y);
        data.push((x + y) / 2.0);
    }

    Frame {
        width,
        height,
        data,
    }
}

/// Benchmark forward simulation across frame sizes
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let model = lookup("Deuteranopia").unwrap();

    for size in [256, 512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("simulate_frame", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let frame = generate_test_frame(w, h);
                b.iter(|| simulate_frame(black_box(&frame), black_box(&model)));
            },
        );
    }

    group.finish();
}

/// Benchmark pseudo-inverse correction (includes the per-call SVD)
fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("correct");
    let model = lookup("Achromatopsia").unwrap();

    for size in [256, 1024].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("correct_frame", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let frame = generate_test_frame(w, h);
                let simulated = simulate_frame(&frame, &model);
                b.iter(|| correct_frame(black_box(&simulated), black_box(&model)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simulate, bench_correct);
criterion_main!(benches);
