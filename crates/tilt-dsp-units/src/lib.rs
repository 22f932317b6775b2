// SPDX-License-Identifier: LGPL-3.0-or-later

//! # tilt-dsp-units
//!
//! Fractional-order spectral tilt filters built on [`tilt_dsp_lib`].
//!
//! A tilt cascade approximates a magnitude response proportional to
//! `f^alpha` over a frequency band using N one-zero/one-pole sections. It
//! includes:
//!
//! - **Design**: pole/zero ladder, bilinear prewarping, unity DC gain
//!   section design and the cascade builder ([`filters`])
//! - **Processing**: the `f64` [`filters::Cascade`] and the lazily rebuilt
//!   `f32` [`filters::SpectralTilt`] processor
//! - **Noise**: white, pink, red, blue, violet and arbitrary-slope noise
//! - **Units**: slope conversions between `alpha`, dB/octave and dB/decade
//!
//! ## Example
//!
//! ```
//! use tilt_dsp_units::filters::build;
//!
//! // 12 sections, 20 Hz .. 10 kHz, pink slope at 48 kHz
//! let mut cascade = build(12, 20.0, 9980.0, -0.5, 48000.0).unwrap();
//! let y = cascade.process(1.0);
//! assert!(y.is_finite());
//! ```
//!
//! Design errors are reported as [`error::TiltError`]; processing a built
//! cascade cannot fail. Design diagnostics go through the `log` facade.

pub mod consts;
pub mod error;
pub mod filters;
pub mod noise;
pub mod units;

pub use error::TiltError;
