// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for spectral tilt design and processing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tilt_dsp_units::filters::spectral_tilt::SpectralTilt;
use tilt_dsp_units::filters::{ShapeParameters, build};
use tilt_dsp_units::noise::{NoiseColor, NoiseGenerator};

const BUF_SIZE: usize = 1024;

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect()
}

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilt_design");

    for &n in &[4usize, 12, 50] {
        let params = ShapeParameters::new(n, 20.0, 9980.0, -0.5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, p| {
            b.iter(|| {
                build(
                    black_box(p.sections),
                    black_box(p.start_freq),
                    black_box(p.bandwidth),
                    black_box(p.alpha),
                    48000.0,
                )
            });
        });
    }

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilt_cascade");
    let src: Vec<f64> = white_noise(BUF_SIZE).into_iter().map(f64::from).collect();
    let mut dst = vec![0.0f64; BUF_SIZE];

    for &n in &[4usize, 12, 50] {
        let Ok(mut cascade) = build(n, 20.0, 9980.0, -0.5, 48000.0) else {
            continue;
        };

        group.bench_function(BenchmarkId::new("block", n), |b| {
            b.iter(|| cascade.process_block(black_box(&mut dst), black_box(&src)));
        });

        group.bench_function(BenchmarkId::new("per_sample", n), |b| {
            b.iter(|| {
                for (out, &x) in dst.iter_mut().zip(src.iter()) {
                    *out = cascade.process(black_box(x));
                }
            });
        });
    }

    group.finish();
}

fn bench_spectral_tilt(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral_tilt");
    let src = white_noise(BUF_SIZE);
    let mut dst = vec![0.0f32; BUF_SIZE];

    group.bench_function("12_sections_f32", |b| {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(48000.0).set_alpha(-0.5);

        b.iter(|| {
            tilt.process(black_box(&mut dst), black_box(&src));
        });
    });

    group.finish();
}

fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise_generator");
    let mut dst = vec![0.0f32; BUF_SIZE];

    for color in [NoiseColor::White, NoiseColor::Pink] {
        group.bench_function(format!("{color:?}"), |b| {
            let mut noise_gen = NoiseGenerator::new();
            noise_gen.init_with_seed(1);
            noise_gen.set_noise_color(color);

            b.iter(|| noise_gen.process_overwrite(black_box(&mut dst)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_design,
    bench_cascade,
    bench_spectral_tilt,
    bench_noise
);
criterion_main!(benches);
