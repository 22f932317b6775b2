// SPDX-License-Identifier: LGPL-3.0-or-later

//! Geometric pole/zero ladder in the s-plane.
//!
//! Poles are spaced by a constant ratio `r` from `w0 = 2*pi*f0` up to
//! `2*pi*(f0 + bw)`. Each zero sits `alpha` ladder steps below its pole:
//!
//! ```text
//!   r     = ((f0 + bw) / f0) ^ (1 / (N - 1))      (r = 1 when N == 1)
//!   mz(i) = w0 * r^(i - alpha)
//!   mp(i) = w0 * r^i
//! ```
//!
//! Interleaving poles and zeros this way gives each section a shelf of
//! `alpha` steps; together they approximate a `f^alpha` magnitude.

use std::f64::consts::TAU;

use crate::error::TiltError;
use crate::filters::shape::ShapeParameters;

/// Continuous-time pole/zero ladder of a tilt cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyLadder {
    sections: usize,
    w0: f64,
    ratio: f64,
    alpha: f64,
}

impl FrequencyLadder {
    /// Compute the ladder for `params`, raising the start frequency to at
    /// least `epsilon`.
    ///
    /// The parameters are expected to be validated. Fails with
    /// `NumericOverflow` if the pole ratio is not finite.
    pub fn new(params: &ShapeParameters, epsilon: f64) -> Result<Self, TiltError> {
        let f0 = params.start_freq.max(epsilon);
        let f1 = f0 + params.bandwidth;

        let ratio = if params.sections > 1 {
            (f1 / f0).powf(1.0 / (params.sections - 1) as f64)
        } else {
            1.0
        };
        if !ratio.is_finite() {
            return Err(TiltError::overflow("pole ratio", None));
        }

        Ok(Self {
            sections: params.sections,
            w0: TAU * f0,
            ratio,
            alpha: params.alpha,
        })
    }

    /// Number of pole/zero pairs.
    pub fn len(&self) -> usize {
        self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections == 0
    }

    /// Radian frequency of the first pole (rad/s).
    pub fn w0(&self) -> f64 {
        self.w0
    }

    /// Ratio between consecutive poles.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Zero location of section `i` (rad/s).
    #[inline]
    pub fn zero(&self, i: usize) -> f64 {
        self.w0 * self.ratio.powf(i as f64 - self.alpha)
    }

    /// Pole location of section `i` (rad/s).
    #[inline]
    pub fn pole(&self, i: usize) -> f64 {
        self.w0 * self.ratio.powf(i as f64)
    }

    /// `(zero, pole)` of section `i`, both checked for finiteness.
    pub fn pair(&self, i: usize) -> Result<(f64, f64), TiltError> {
        let mz = self.zero(i);
        if !mz.is_finite() {
            return Err(TiltError::overflow("zero frequency", Some(i)));
        }
        let mp = self.pole(i);
        if !mp.is_finite() {
            return Err(TiltError::overflow("pole frequency", Some(i)));
        }
        Ok((mz, mp))
    }

    /// Iterate over the unchecked `(zero, pole)` pairs in section order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.sections).map(|i| (self.zero(i), self.pole(i)))
    }
}
