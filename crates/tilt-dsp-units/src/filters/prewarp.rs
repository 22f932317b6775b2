// SPDX-License-Identifier: LGPL-3.0-or-later

//! Bilinear-transform frequency prewarping around a shared anchor.
//!
//! The bilinear transform `s = c * (1 - z^-1) / (1 + z^-1)` compresses the
//! analog frequency axis: analog `W` lands on digital `w` with
//! `W = c * tan(w / 2)`. Prewarping moves every corner so it lands where
//! it was meant to:
//!
//! ```text
//!   prewarp(w) = wp * tan(w*T/2) / tan(wp*T/2)
//! ```
//!
//! All poles and zeros of a cascade share one anchor `wp` (the first pole,
//! `w0`). Paired with `c = wp / tan(wp*T/2)`, every prewarped corner maps
//! back exactly onto its intended frequency and the anchor is unchanged.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::TiltError;

/// Standard prewarping formula, `wp * tan(w*T/2) / tan(wp*T/2)`.
///
/// `w` and `anchor` are in rad/s. `anchor` must be positive and below
/// Nyquist; use [`Prewarp`] for a checked, reusable form.
#[inline]
pub fn prewarp(w: f64, sample_rate: f64, anchor: f64) -> f64 {
    let half_t = 0.5 / sample_rate;
    anchor * (w * half_t).tan() / (anchor * half_t).tan()
}

/// Prewarping state for one sample rate and one anchor frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prewarp {
    sample_rate: f64,
    half_period: f64,
    anchor: f64,
    anchor_tan: f64,
}

impl Prewarp {
    /// Set up prewarping at `sample_rate` (Hz) around `anchor` (rad/s).
    ///
    /// The anchor must be positive and strictly below the Nyquist
    /// frequency, otherwise its tangent is not a usable divisor.
    pub fn new(sample_rate: f64, anchor: f64) -> Result<Self, TiltError> {
        if !anchor.is_finite() {
            return Err(TiltError::overflow("anchor frequency", None));
        }
        if anchor <= 0.0 {
            return Err(TiltError::invalid("anchor", "must be positive"));
        }

        let half_period = 0.5 / sample_rate;
        let theta = anchor * half_period;
        if theta >= FRAC_PI_2 {
            return Err(TiltError::AboveNyquist {
                index: 0,
                frequency: anchor / (2.0 * PI),
                nyquist: 0.5 * sample_rate,
            });
        }

        Ok(Self {
            sample_rate,
            half_period,
            anchor,
            anchor_tan: theta.tan(),
        })
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Anchor frequency (rad/s).
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Angular Nyquist frequency (rad/s).
    pub fn nyquist(&self) -> f64 {
        PI * self.sample_rate
    }

    /// Whether `w` (rad/s) is strictly below Nyquist.
    #[inline]
    pub fn is_below_nyquist(&self, w: f64) -> bool {
        w * self.half_period < FRAC_PI_2
    }

    /// Prewarp `w` (rad/s) around the anchor.
    #[inline]
    pub fn warp(&self, w: f64) -> f64 {
        self.anchor * (w * self.half_period).tan() / self.anchor_tan
    }

    /// Bilinear constant `c` that maps the anchor onto itself.
    ///
    /// For anchors well below Nyquist this tends to `2 * sample_rate`.
    #[inline]
    pub fn bilinear_constant(&self) -> f64 {
        self.anchor / self.anchor_tan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::f64::consts::TAU;

    const SR: f64 = 48000.0;

    #[test]
    fn test_anchor_is_fixed_point() {
        let wp = TAU * 1000.0;
        let pw = Prewarp::new(SR, wp).unwrap();
        assert_approx_eq!(f64, pw.warp(wp), wp, ulps = 4);
        assert_approx_eq!(f64, prewarp(wp, SR, wp), wp, ulps = 4);
    }

    #[test]
    fn test_matches_free_function() {
        let wp = TAU * 200.0;
        let pw = Prewarp::new(SR, wp).unwrap();
        for &f in &[20.0, 500.0, 5000.0, 15000.0] {
            let w = TAU * f;
            assert_approx_eq!(f64, pw.warp(w), prewarp(w, SR, wp), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_warp_expands_high_frequencies() {
        let wp = TAU * 100.0;
        let pw = Prewarp::new(SR, wp).unwrap();
        // tan grows faster than linear: high corners move up
        let w = TAU * 12000.0;
        assert!(pw.warp(w) > w);
        // Low corners barely move
        let w_low = TAU * 50.0;
        assert_approx_eq!(f64, pw.warp(w_low), w_low, epsilon = w_low * 1e-4);
    }

    #[test]
    fn test_bilinear_maps_back_exactly() {
        // Digital frequency of an analog corner W under s = c(1-z^-1)/(1+z^-1)
        // is 2*atan(W/c); with prewarping it must equal w*T.
        let wp = TAU * 300.0;
        let pw = Prewarp::new(SR, wp).unwrap();
        let c = pw.bilinear_constant();
        for &f in &[40.0, 300.0, 3000.0, 18000.0] {
            let w = TAU * f;
            let digital = 2.0 * (pw.warp(w) / c).atan();
            assert_approx_eq!(f64, digital, w / SR, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bilinear_constant_near_twice_sample_rate() {
        let pw = Prewarp::new(SR, TAU * 10.0).unwrap();
        assert_approx_eq!(f64, pw.bilinear_constant(), 2.0 * SR, epsilon = 0.1);
    }

    #[test]
    fn test_nyquist_check() {
        let pw = Prewarp::new(SR, TAU * 100.0).unwrap();
        assert!(pw.is_below_nyquist(TAU * 23999.0));
        assert!(!pw.is_below_nyquist(TAU * 24001.0));
        assert!(!pw.is_below_nyquist(TAU * 30000.0));
        assert_approx_eq!(f64, pw.nyquist(), TAU * 24000.0, ulps = 2);
    }

    #[test]
    fn test_anchor_above_nyquist_rejected() {
        assert!(matches!(
            Prewarp::new(SR, TAU * 25000.0),
            Err(TiltError::AboveNyquist { index: 0, .. })
        ));
    }

    #[test]
    fn test_zero_anchor_rejected() {
        assert!(matches!(
            Prewarp::new(SR, 0.0),
            Err(TiltError::InvalidParameter { name: "anchor", .. })
        ));
    }
}
