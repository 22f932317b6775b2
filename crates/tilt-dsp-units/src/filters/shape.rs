// SPDX-License-Identifier: LGPL-3.0-or-later

//! Shape parameters of a spectral tilt cascade.

use crate::consts::{DFL_ALPHA, DFL_BANDWIDTH, DFL_SECTIONS, DFL_START_FREQ};
use crate::error::TiltError;

/// The four values that define the shape of a tilt cascade.
///
/// A cascade approximates a magnitude response proportional to
/// `f^alpha` between `start_freq` and `start_freq + bandwidth`, using
/// `sections` one-zero/one-pole sections whose poles are spaced
/// geometrically over that band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeParameters {
    /// Number of sections (`N`), at least 1.
    pub sections: usize,
    /// Start frequency of the band (`f0`, Hz).
    pub start_freq: f64,
    /// Width of the band (`bw`, Hz), non-negative.
    pub bandwidth: f64,
    /// Slope exponent: magnitude is proportional to `f^alpha`.
    pub alpha: f64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            sections: DFL_SECTIONS,
            start_freq: DFL_START_FREQ,
            bandwidth: DFL_BANDWIDTH,
            alpha: DFL_ALPHA,
        }
    }
}

impl ShapeParameters {
    pub fn new(sections: usize, start_freq: f64, bandwidth: f64, alpha: f64) -> Self {
        Self {
            sections,
            start_freq,
            bandwidth,
            alpha,
        }
    }

    /// Upper edge of the band (`f0 + bw`, Hz).
    pub fn end_freq(&self) -> f64 {
        self.start_freq + self.bandwidth
    }

    /// Check every parameter against its domain.
    ///
    /// A start frequency of zero is accepted here; the ladder raises it to
    /// the frequency floor. Negative start frequencies are rejected.
    pub fn validate(&self) -> Result<(), TiltError> {
        if self.sections < 1 {
            return Err(TiltError::invalid("sections", "must be at least 1"));
        }
        if !self.start_freq.is_finite() {
            return Err(TiltError::invalid("start_freq", "must be finite"));
        }
        if self.start_freq < 0.0 {
            return Err(TiltError::invalid("start_freq", "must not be negative"));
        }
        if !self.bandwidth.is_finite() {
            return Err(TiltError::invalid("bandwidth", "must be finite"));
        }
        if self.bandwidth < 0.0 {
            return Err(TiltError::invalid("bandwidth", "must not be negative"));
        }
        if !self.alpha.is_finite() {
            return Err(TiltError::invalid("alpha", "must be finite"));
        }
        Ok(())
    }
}

/// Check a sample rate is usable for design.
pub fn validate_sample_rate(sample_rate: f64) -> Result<(), TiltError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(TiltError::invalid(
            "sample_rate",
            "must be finite and positive",
        ));
    }
    Ok(())
}
