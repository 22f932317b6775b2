// SPDX-License-Identifier: LGPL-3.0-or-later

//! Noise sources.
//!
//! - **LCG**: seeded white noise, uniform or Gaussian
//! - **Generator**: white noise colored by a spectral tilt cascade
//!
//! # Examples
//! ```
//! use tilt_dsp_units::noise::{NoiseColor, NoiseGenerator};
//! use tilt_dsp_units::units::SlopeUnit;
//!
//! let mut noise_gen = NoiseGenerator::new();
//! noise_gen.init_with_seed(12345);
//! noise_gen.set_noise_color(NoiseColor::Arbitrary);
//! noise_gen.set_color_slope(-4.5, SlopeUnit::DbPerOctave);
//!
//! let mut output = vec![0.0; 100];
//! noise_gen.process_overwrite(&mut output);
//! ```

pub mod generator;
pub mod lcg;

pub use generator::{NoiseColor, NoiseGenerator};
pub use lcg::{Lcg, LcgDistribution};
