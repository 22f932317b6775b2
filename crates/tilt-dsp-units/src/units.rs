// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion functions.
//!
//! Slope conversions between the tilt exponent `alpha` (magnitude
//! proportional to `f^alpha`, i.e. nepers per neper) and the dB-based slope
//! units used on control surfaces, plus frequency and gain helpers.

use std::f64::consts::TAU;

use crate::consts::{DB_PER_DECADE_PER_NEPER, DB_PER_OCTAVE_PER_NEPER};

/// Unit a spectral slope is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlopeUnit {
    /// Nepers per neper: the exponent `alpha` itself.
    NeperPerNeper,
    /// Decibels per octave.
    DbPerOctave,
    /// Decibels per decade.
    DbPerDecade,
}

/// Convert a slope in `unit` to the tilt exponent `alpha`.
///
/// ```
/// use tilt_dsp_units::units::{SlopeUnit, slope_to_alpha};
///
/// // Pink noise: -3 dB/octave is roughly alpha = -0.5
/// let alpha = slope_to_alpha(-3.0103, SlopeUnit::DbPerOctave);
/// assert!((alpha + 0.5).abs() < 1e-4);
/// ```
#[inline]
pub fn slope_to_alpha(slope: f64, unit: SlopeUnit) -> f64 {
    match unit {
        SlopeUnit::NeperPerNeper => slope,
        SlopeUnit::DbPerOctave => slope / DB_PER_OCTAVE_PER_NEPER,
        SlopeUnit::DbPerDecade => slope / DB_PER_DECADE_PER_NEPER,
    }
}

/// Convert the tilt exponent `alpha` to a slope in `unit`.
#[inline]
pub fn alpha_to_slope(alpha: f64, unit: SlopeUnit) -> f64 {
    match unit {
        SlopeUnit::NeperPerNeper => alpha,
        SlopeUnit::DbPerOctave => alpha * DB_PER_OCTAVE_PER_NEPER,
        SlopeUnit::DbPerDecade => alpha * DB_PER_DECADE_PER_NEPER,
    }
}

/// Convert a frequency in Hz to angular frequency in rad/s.
#[inline]
pub fn hz_to_rad(freq: f64) -> f64 {
    TAU * freq
}

/// Convert angular frequency in rad/s to Hz.
#[inline]
pub fn rad_to_hz(w: f64) -> f64 {
    w / TAU
}

/// Convert a frequency in Hz to normalized angular frequency (rad/sample).
#[inline]
pub fn hz_to_normalized(freq: f64, sample_rate: f64) -> f64 {
    TAU * freq / sample_rate
}

/// Convert linear gain to decibels.
#[inline]
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.log10()
}

/// Convert decibels to linear gain.
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}
