// SPDX-License-Identifier: LGPL-3.0-or-later

//! Horizontal (reduction) operations on float buffers.

use multiversion::multiversion;

/// Maximum absolute value. Returns `0.0` for an empty buffer.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn abs_max(src: &[f64]) -> f64 {
    src.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
}

/// Sum of squares.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sqr_sum(src: &[f32]) -> f32 {
    src.iter().map(|x| x * x).sum()
}

/// Root mean square (RMS). Returns `0.0` for an empty buffer.
pub fn rms(src: &[f32]) -> f32 {
    if src.is_empty() {
        return 0.0;
    }
    (sqr_sum(src) / src.len() as f32).sqrt()
}
