// SPDX-License-Identifier: LGPL-3.0-or-later

//! Spectral tilt processor applying a `f^alpha` magnitude slope.
//!
//! [`SpectralTilt`] owns the shape parameters and the active [`Cascade`].
//! Setters only mark the processor dirty; the cascade is rebuilt on the
//! next [`update`](SpectralTilt::update) or processing call.
//!
//! A failed rebuild leaves the previous cascade running and records the
//! error. Until the first successful build audio passes through unchanged.

use log::warn;
use num_complex::Complex64;
use tilt_dsp_lib::math::scalar::scale;

use crate::consts::{DFL_SAMPLE_RATE, FREQ_EPSILON};
use crate::error::TiltError;
use crate::filters::cascade::{Cascade, CascadeBuilder};
use crate::filters::shape::ShapeParameters;
use crate::units::{SlopeUnit, alpha_to_slope, db_to_gain, slope_to_alpha};

/// Block size used when widening `f32` audio to the `f64` cascade.
const BUF_LIM_SIZE: usize = 256;

/// Spectral tilt filter over `f32` audio.
///
/// # Examples
///
/// ```
/// use tilt_dsp_units::filters::spectral_tilt::SpectralTilt;
/// use tilt_dsp_units::units::SlopeUnit;
///
/// let mut tilt = SpectralTilt::new();
/// tilt.set_sample_rate(48000.0)
///     .set_slope(-3.0, SlopeUnit::DbPerOctave); // darken by 3 dB/octave
/// tilt.update().unwrap();
///
/// let mut buf = vec![0.0f32; 256];
/// // ... fill buf with audio ...
/// tilt.process_inplace(&mut buf);
/// ```
#[derive(Debug, Clone)]
pub struct SpectralTilt {
    params: ShapeParameters,
    sample_rate: f64,
    epsilon: f64,
    output_gain: f32,
    dirty: bool,
    cascade: Option<Cascade>,
    last_error: Option<TiltError>,
}

impl Default for SpectralTilt {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTilt {
    /// Create a new spectral tilt filter with default settings.
    ///
    /// Defaults: 48 kHz, 12 sections over 20 Hz .. 10 kHz, flat slope,
    /// unity output gain.
    pub fn new() -> Self {
        Self {
            params: ShapeParameters::default(),
            sample_rate: DFL_SAMPLE_RATE,
            epsilon: FREQ_EPSILON,
            output_gain: 1.0,
            dirty: true,
            cascade: None,
            last_error: None,
        }
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f64) -> &mut Self {
        if self.sample_rate != sr {
            self.sample_rate = sr;
            self.dirty = true;
        }
        self
    }

    /// Set the number of sections.
    pub fn set_sections(&mut self, n: usize) -> &mut Self {
        if self.params.sections != n {
            self.params.sections = n;
            self.dirty = true;
        }
        self
    }

    /// Set the start frequency of the tilt band in Hz.
    pub fn set_start_frequency(&mut self, f0: f64) -> &mut Self {
        if self.params.start_freq != f0 {
            self.params.start_freq = f0;
            self.dirty = true;
        }
        self
    }

    /// Set the width of the tilt band in Hz.
    pub fn set_bandwidth(&mut self, bw: f64) -> &mut Self {
        if self.params.bandwidth != bw {
            self.params.bandwidth = bw;
            self.dirty = true;
        }
        self
    }

    /// Set the slope exponent directly.
    pub fn set_alpha(&mut self, alpha: f64) -> &mut Self {
        if self.params.alpha != alpha {
            self.params.alpha = alpha;
            self.dirty = true;
        }
        self
    }

    /// Set the slope in any unit.
    ///
    /// Positive slopes brighten (boost highs), negative slopes darken.
    pub fn set_slope(&mut self, slope: f64, unit: SlopeUnit) -> &mut Self {
        self.set_alpha(slope_to_alpha(slope, unit))
    }

    /// Replace all shape parameters at once.
    pub fn set_params(&mut self, params: ShapeParameters) -> &mut Self {
        if self.params != params {
            self.params = params;
            self.dirty = true;
        }
        self
    }

    /// Set the start frequency floor.
    pub fn set_epsilon(&mut self, epsilon: f64) -> &mut Self {
        if self.epsilon != epsilon {
            self.epsilon = epsilon;
            self.dirty = true;
        }
        self
    }

    /// Set the gain applied after the cascade, in dB.
    ///
    /// Does not touch the cascade, so it takes effect without a rebuild.
    pub fn set_output_gain_db(&mut self, db: f32) -> &mut Self {
        self.output_gain = db_to_gain(db as f64) as f32;
        self
    }

    /// Set the linear gain applied after the cascade.
    pub fn set_output_gain(&mut self, gain: f32) -> &mut Self {
        self.output_gain = gain;
        self
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    /// Current slope expressed in `unit`.
    pub fn slope(&self, unit: SlopeUnit) -> f64 {
        alpha_to_slope(self.params.alpha, unit)
    }

    pub fn output_gain(&self) -> f32 {
        self.output_gain
    }

    /// Whether parameters changed since the last rebuild attempt.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The active cascade, if one was ever built.
    pub fn cascade(&self) -> Option<&Cascade> {
        self.cascade.as_ref()
    }

    /// Error of the most recent rebuild attempt, if it failed.
    pub fn last_error(&self) -> Option<&TiltError> {
        self.last_error.as_ref()
    }

    /// Rebuild the cascade if parameters have changed.
    ///
    /// On failure the previous cascade stays active and the error is both
    /// returned and kept in [`last_error`](SpectralTilt::last_error).
    pub fn update(&mut self) -> Result<(), TiltError> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        let built = CascadeBuilder::with_params(self.params, self.sample_rate)
            .set_epsilon(self.epsilon)
            .build();

        match built {
            Ok(cascade) => {
                self.cascade = Some(cascade);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(
                    "spectral tilt rebuild failed, keeping {} cascade: {e}",
                    if self.cascade.is_some() { "previous" } else { "bypass" }
                );
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Reset filter state (clear all section memory).
    pub fn clear(&mut self) {
        if let Some(cascade) = self.cascade.as_mut() {
            cascade.reset();
        }
    }

    /// Process audio from `src` into `dst`.
    ///
    /// Output length is `min(dst.len(), src.len())`. Rebuilds first if
    /// parameters are dirty.
    pub fn process(&mut self, dst: &mut [f32], src: &[f32]) {
        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(&src[..n]);
        self.process_inplace(&mut dst[..n]);
    }

    /// Process audio in-place.
    ///
    /// Rebuilds first if parameters are dirty.
    pub fn process_inplace(&mut self, buf: &mut [f32]) {
        if self.dirty {
            // Failure is recorded in last_error; keep running the old cascade
            let _ = self.update();
        }

        if let Some(cascade) = self.cascade.as_mut() {
            let mut temp = [0.0_f64; BUF_LIM_SIZE];
            for chunk in buf.chunks_mut(BUF_LIM_SIZE) {
                let wide = &mut temp[..chunk.len()];
                for (w, &x) in wide.iter_mut().zip(chunk.iter()) {
                    *w = x as f64;
                }
                cascade.process_inplace(wide);
                for (x, &w) in chunk.iter_mut().zip(wide.iter()) {
                    *x = w as f32;
                }
            }
        }

        if self.output_gain != 1.0 {
            scale(buf, self.output_gain);
        }
    }

    /// Complex response of the active cascade and output gain at `freq` Hz.
    ///
    /// Unity before the first successful build.
    pub fn freq_response(&self, freq: f64) -> Complex64 {
        let h = self
            .cascade
            .as_ref()
            .map_or(Complex64::new(1.0, 0.0), |c| c.freq_response(freq));
        h * self.output_gain as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const SR: f64 = 48000.0;

    fn slope_db(tilt: &SpectralTilt, f_lo: f64, f_hi: f64) -> f64 {
        20.0 * (tilt.freq_response(f_hi).norm() / tilt.freq_response(f_lo).norm()).log10()
    }

    #[test]
    fn zero_slope_is_unity() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(SR).set_alpha(0.0);
        tilt.update().unwrap();

        for &freq in &[100.0, 1000.0, 5000.0, 10000.0] {
            let mag = tilt.freq_response(freq).norm();
            assert_approx_eq!(f64, mag, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn positive_slope_boosts_highs() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(SR).set_slope(3.0, SlopeUnit::DbPerOctave);
        tilt.update().unwrap();
        assert!(slope_db(&tilt, 100.0, 5000.0) > 0.0);
    }

    #[test]
    fn negative_slope_boosts_lows() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(SR).set_slope(-3.0, SlopeUnit::DbPerOctave);
        tilt.update().unwrap();
        assert!(slope_db(&tilt, 100.0, 5000.0) < 0.0);
    }

    #[test]
    fn slope_measurement() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(SR).set_slope(-3.0, SlopeUnit::DbPerOctave);
        tilt.update().unwrap();

        // One octave inside the band
        let db = slope_db(&tilt, 400.0, 800.0);
        assert!(
            (db + 3.0).abs() < 0.5,
            "slope between 400 Hz and 800 Hz should be ~-3 dB, got {db:.2}"
        );
    }

    #[test]
    fn slope_round_trips_through_units() {
        let mut tilt = SpectralTilt::new();
        tilt.set_slope(-20.0, SlopeUnit::DbPerDecade);
        assert_approx_eq!(f64, tilt.alpha(), -1.0, ulps = 2);
        assert_approx_eq!(f64, tilt.slope(SlopeUnit::DbPerOctave), -6.020_599_913_279_624, ulps = 4);
    }

    #[test]
    fn setters_mark_dirty_only_on_change() {
        let mut tilt = SpectralTilt::new();
        tilt.update().unwrap();
        assert!(!tilt.is_dirty());

        tilt.set_sections(12);
        assert!(!tilt.is_dirty(), "same value should not dirty");
        tilt.set_sections(6);
        assert!(tilt.is_dirty());
    }

    #[test]
    fn auto_update_on_process() {
        let mut tilt = SpectralTilt::new();
        tilt.set_alpha(0.5);
        assert!(tilt.is_dirty());

        let src = [1.0, 0.0, 0.0, 0.0];
        let mut dst = [0.0; 4];
        tilt.process(&mut dst, &src);
        assert!(!tilt.is_dirty(), "process should auto-update");
        assert!(tilt.cascade().is_some());
    }

    #[test]
    fn failed_rebuild_keeps_previous_cascade() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sections(4).set_alpha(0.5);
        tilt.update().unwrap();
        let before = tilt.cascade().unwrap().coefficients().to_vec();

        tilt.set_start_frequency(-10.0);
        let err = tilt.update().unwrap_err();
        assert!(matches!(err, TiltError::InvalidParameter { name: "start_freq", .. }));
        assert_eq!(tilt.last_error(), Some(&err));
        assert_eq!(tilt.cascade().unwrap().coefficients(), &before[..]);

        tilt.set_start_frequency(50.0);
        tilt.update().unwrap();
        assert!(tilt.last_error().is_none());
        assert_ne!(tilt.cascade().unwrap().coefficients(), &before[..]);
    }

    #[test]
    fn passthrough_before_first_build() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sections(0);

        let src: Vec<f32> = (0..32).map(|i| (i as f32 * 0.4).sin()).collect();
        let mut dst = vec![0.0f32; 32];
        tilt.process(&mut dst, &src);

        assert!(tilt.cascade().is_none());
        assert!(tilt.last_error().is_some());
        assert_eq!(dst, src);
    }

    #[test]
    fn output_gain_applied() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sections(0).set_output_gain(0.5);

        let src = [1.0f32, -2.0, 4.0];
        let mut dst = [0.0f32; 3];
        tilt.process(&mut dst, &src);
        assert_eq!(dst, [0.5, -1.0, 2.0]);

        tilt.set_output_gain_db(-6.020_6);
        assert_approx_eq!(f32, tilt.output_gain(), 0.5, epsilon = 1e-4);
        assert_approx_eq!(f64, tilt.freq_response(1000.0).norm(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn clear_resets_state() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sample_rate(SR).set_alpha(0.5);
        tilt.update().unwrap();

        let mut buf = [1.0, 0.5, 0.3, 0.1, -0.2, 0.4, 0.0, 0.7];
        tilt.process_inplace(&mut buf);

        tilt.clear();
        let impulse = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut ir1 = [0.0f32; 8];
        tilt.process(&mut ir1, &impulse);

        tilt.clear();
        let mut ir2 = [0.0f32; 8];
        tilt.process(&mut ir2, &impulse);

        assert_eq!(ir1, ir2);
    }

    #[test]
    fn process_inplace_matches_process() {
        let mut t1 = SpectralTilt::new();
        t1.set_alpha(-0.5);
        let mut t2 = t1.clone();

        // Longer than the internal block so chunking is exercised
        let src: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.3).sin() * 0.8).collect();
        let mut dst = vec![0.0f32; 1000];
        let mut buf = src.clone();

        t1.process(&mut dst, &src);
        t2.process_inplace(&mut buf);

        assert_eq!(dst, buf);
    }

    #[test]
    fn matches_f64_cascade() {
        let mut tilt = SpectralTilt::new();
        tilt.set_sections(6).set_alpha(0.5);
        tilt.update().unwrap();
        let mut reference = tilt.cascade().unwrap().clone();

        let src: Vec<f32> = (0..300).map(|i| ((i * 13) % 7) as f32 * 0.1 - 0.3).collect();
        let mut dst = vec![0.0f32; 300];
        tilt.process(&mut dst, &src);

        for (i, &x) in src.iter().enumerate() {
            let y = reference.process(x as f64) as f32;
            assert_eq!(dst[i], y, "mismatch at sample {i}");
        }
    }
}
