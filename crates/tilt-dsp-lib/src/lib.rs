// SPDX-License-Identifier: LGPL-3.0-or-later

//! # tilt-dsp-lib
//!
//! Low-level primitives for first-order (one-zero/one-pole) filter
//! cascades.
//!
//! This crate provides the foundational operations used by
//! `tilt-dsp-units` to build spectral tilt processors. It includes:
//!
//! - **Types**: section coefficients ([`types::Tf1`]) and two-sample
//!   section memory ([`types::Tf1State`])
//! - **Filters**: single-sample, block and in-place processing for one
//!   section or a whole cascade, plus complex frequency response
//! - **Math**: gain/offset and reduction helpers on audio buffers
//!
//! ## Design
//!
//! All filter arithmetic runs in `f64`. The recursive kernels are plain
//! scalar loops; element-wise buffer helpers use runtime SIMD dispatch via
//! the `multiversion` crate (AVX2+FMA, AVX, SSE4.1 and NEON variants, the
//! best one picked at startup).

pub mod filters;
pub mod math;
pub mod types;
