// SPDX-License-Identifier: LGPL-3.0-or-later

//! Linear congruential white noise source.
//!
//! `X[n+1] = (a * X[n] + c) mod 2^32` with the Numerical Recipes constants
//! (a = 1664525, c = 1013904223). Output is zero-mean, unscaled white
//! noise; the coloring filter and level are applied by
//! [`NoiseGenerator`](crate::noise::NoiseGenerator).

use std::f64::consts::TAU;

const LCG_A: u32 = 1_664_525;
const LCG_C: u32 = 1_013_904_223;

/// Amplitude distribution of the white noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcgDistribution {
    /// Uniform over [-1, 1).
    Uniform,
    /// Gaussian with mean 0 and standard deviation 1 (Box-Muller).
    Gaussian,
}

/// Seeded LCG white noise generator.
///
/// # Examples
/// ```
/// use tilt_dsp_units::noise::lcg::{Lcg, LcgDistribution};
///
/// let mut lcg = Lcg::with_seed(12345);
/// lcg.set_distribution(LcgDistribution::Gaussian);
///
/// let mut output = vec![0.0f32; 100];
/// lcg.process_overwrite(&mut output);
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
    distribution: LcgDistribution,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcg {
    /// Create a uniform generator seeded with 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: seed,
            distribution: LcgDistribution::Uniform,
        }
    }

    /// Restart the sequence from `seed`.
    pub fn init_with_seed(&mut self, seed: u32) {
        self.state = seed;
    }

    pub fn set_distribution(&mut self, dist: LcgDistribution) {
        self.distribution = dist;
    }

    pub fn distribution(&self) -> LcgDistribution {
        self.distribution
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        self.state
    }

    /// Uniform value in [0, 1).
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Generate one sample.
    pub fn process_single(&mut self) -> f32 {
        match self.distribution {
            LcgDistribution::Uniform => (2.0 * self.next_unit() - 1.0) as f32,
            LcgDistribution::Gaussian => {
                // Avoid ln(0)
                let u1 = self.next_unit().max(f64::EPSILON);
                let u2 = self.next_unit();
                ((-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()) as f32
            }
        }
    }

    /// Fill `dst` with noise.
    pub fn process_overwrite(&mut self, dst: &mut [f32]) {
        for d in dst.iter_mut() {
            *d = self.process_single();
        }
    }
}
