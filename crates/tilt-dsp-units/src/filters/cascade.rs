// SPDX-License-Identifier: LGPL-3.0-or-later

//! Spectral tilt cascade: design and per-sample execution.
//!
//! [`CascadeBuilder`] runs ladder → prewarp → section design for every
//! section index and either returns a complete [`Cascade`] or the first
//! error. A cascade is never built with missing sections.
//!
//! [`Cascade`] owns the section coefficients and one two-sample memory per
//! section. Processing is pure arithmetic over the validated coefficients:
//! it cannot fail and never allocates.

use log::debug;
use num_complex::Complex64;
use tilt_dsp_lib::filters::{
    tf1_cascade_freq_response, tf1_cascade_group_delay, tf1_cascade_process,
    tf1_cascade_process_inplace, tf1_cascade_process_sample,
};
use tilt_dsp_lib::types::{Tf1, Tf1State};

use crate::consts::{DFL_SAMPLE_RATE, FREQ_EPSILON};
use crate::error::TiltError;
use crate::filters::ladder::FrequencyLadder;
use crate::filters::prewarp::Prewarp;
use crate::filters::section::{Section, design_section};
use crate::filters::shape::{ShapeParameters, validate_sample_rate};
use crate::units::{gain_to_db, hz_to_normalized, rad_to_hz};

/// Builder for [`Cascade`].
///
/// # Examples
///
/// ```
/// use tilt_dsp_units::filters::cascade::CascadeBuilder;
///
/// let cascade = CascadeBuilder::new()
///     .set_sections(8)
///     .set_start_frequency(50.0)
///     .set_bandwidth(9950.0)
///     .set_alpha(-0.5)
///     .set_sample_rate(48000.0)
///     .build()
///     .unwrap();
/// assert_eq!(cascade.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeBuilder {
    params: ShapeParameters,
    sample_rate: f64,
    epsilon: f64,
}

impl Default for CascadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeBuilder {
    /// Create a builder with default shape, 48 kHz and the default
    /// frequency floor.
    pub fn new() -> Self {
        Self {
            params: ShapeParameters::default(),
            sample_rate: DFL_SAMPLE_RATE,
            epsilon: FREQ_EPSILON,
        }
    }

    /// Create a builder from existing shape parameters.
    pub fn with_params(params: ShapeParameters, sample_rate: f64) -> Self {
        Self {
            params,
            sample_rate,
            epsilon: FREQ_EPSILON,
        }
    }

    /// Set the number of sections.
    pub fn set_sections(&mut self, n: usize) -> &mut Self {
        self.params.sections = n;
        self
    }

    /// Set the start frequency of the band in Hz.
    pub fn set_start_frequency(&mut self, f0: f64) -> &mut Self {
        self.params.start_freq = f0;
        self
    }

    /// Set the width of the band in Hz.
    pub fn set_bandwidth(&mut self, bw: f64) -> &mut Self {
        self.params.bandwidth = bw;
        self
    }

    /// Set the slope exponent.
    pub fn set_alpha(&mut self, alpha: f64) -> &mut Self {
        self.params.alpha = alpha;
        self
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f64) -> &mut Self {
        self.sample_rate = sr;
        self
    }

    /// Set the floor the start frequency is raised to before design.
    pub fn set_epsilon(&mut self, epsilon: f64) -> &mut Self {
        self.epsilon = epsilon;
        self
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Design the cascade.
    ///
    /// Deterministic and side-effect free apart from a debug log line.
    pub fn build(&self) -> Result<Cascade, TiltError> {
        self.params.validate()?;
        validate_sample_rate(self.sample_rate)?;
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(TiltError::invalid("epsilon", "must be finite and positive"));
        }

        let ladder = FrequencyLadder::new(&self.params, self.epsilon)?;
        let warp = Prewarp::new(self.sample_rate, ladder.w0())?;
        let c = warp.bilinear_constant();

        let n = ladder.len();
        let mut sections = Vec::with_capacity(n);
        let mut coeffs = Vec::with_capacity(n);

        for i in 0..n {
            let (mz, mp) = ladder.pair(i)?;
            if !warp.is_below_nyquist(mp) {
                return Err(TiltError::AboveNyquist {
                    index: i,
                    frequency: rad_to_hz(mp),
                    nyquist: 0.5 * self.sample_rate,
                });
            }

            let zero = warp.warp(mz);
            if !zero.is_finite() {
                return Err(TiltError::overflow("prewarped zero", Some(i)));
            }
            let pole = warp.warp(mp);
            if !pole.is_finite() {
                return Err(TiltError::overflow("prewarped pole", Some(i)));
            }

            let section = design_section(i, zero, pole)?;
            let tf = section.discretize(c);
            if !(tf.b0.is_finite() && tf.b1.is_finite() && tf.a1.is_finite()) {
                return Err(TiltError::overflow("discrete coefficients", Some(i)));
            }
            // A corner far below the sample rate can round onto z = 1
            if !(tf.a1.abs() < 1.0 && tf.dc_gain().is_finite()) {
                return Err(TiltError::DegenerateSection { index: i });
            }

            sections.push(section);
            coeffs.push(tf);
        }

        debug!(
            "built spectral tilt cascade: sections={n} ratio={:.6} w0={:.3} alpha={} sr={}",
            ladder.ratio(),
            ladder.w0(),
            self.params.alpha,
            self.sample_rate
        );

        Ok(Cascade {
            params: self.params,
            sample_rate: self.sample_rate,
            sections,
            coeffs,
            states: vec![Tf1State::default(); n],
        })
    }
}

/// Build a cascade of `n` sections approximating `f^alpha` over
/// `[f0, f0 + bw]` at `sample_rate`.
///
/// Every pole must lie strictly below Nyquist (`f0 + bw < sample_rate / 2`)
/// and far enough above DC to stay off the unit circle after
/// discretization; otherwise the build fails with `AboveNyquist` or
/// `DegenerateSection`.
pub fn build(n: usize, f0: f64, bw: f64, alpha: f64, sample_rate: f64) -> Result<Cascade, TiltError> {
    CascadeBuilder::with_params(ShapeParameters::new(n, f0, bw, alpha), sample_rate).build()
}

/// A built spectral tilt filter: N first-order sections in series.
///
/// Invariant: `sections`, `coeffs` and `states` all have length N.
#[derive(Debug, Clone)]
pub struct Cascade {
    params: ShapeParameters,
    sample_rate: f64,
    sections: Vec<Section>,
    coeffs: Vec<Tf1>,
    states: Vec<Tf1State>,
}

impl Cascade {
    /// Build a cascade for `params` at `sample_rate`.
    pub fn build(params: &ShapeParameters, sample_rate: f64) -> Result<Self, TiltError> {
        CascadeBuilder::with_params(*params, sample_rate).build()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always `false` for a built cascade.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Continuous-time section coefficients, in processing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Discrete-time section coefficients, in processing order.
    pub fn coefficients(&self) -> &[Tf1] {
        &self.coeffs
    }

    /// Current section memories, in processing order.
    pub fn states(&self) -> &[Tf1State] {
        &self.states
    }

    /// Process one sample through all sections.
    #[inline]
    pub fn process(&mut self, x: f64) -> f64 {
        tf1_cascade_process_sample(&self.coeffs, &mut self.states, x)
    }

    /// Process audio from `src` into `dst`.
    ///
    /// Output length is `min(dst.len(), src.len())`. State carries over
    /// between calls.
    pub fn process_block(&mut self, dst: &mut [f64], src: &[f64]) {
        tf1_cascade_process(dst, src, &self.coeffs, &mut self.states);
    }

    /// Process audio in-place.
    pub fn process_inplace(&mut self, buf: &mut [f64]) {
        tf1_cascade_process_inplace(buf, &self.coeffs, &mut self.states);
    }

    /// Reset every section memory to zero.
    pub fn reset(&mut self) {
        for st in &mut self.states {
            st.reset();
        }
    }

    /// Complex frequency response at `freq` Hz.
    pub fn freq_response(&self, freq: f64) -> Complex64 {
        tf1_cascade_freq_response(&self.coeffs, hz_to_normalized(freq, self.sample_rate))
    }

    /// Linear magnitude at `freq` Hz.
    pub fn magnitude(&self, freq: f64) -> f64 {
        self.freq_response(freq).norm()
    }

    /// Magnitude at `freq` Hz in dB.
    pub fn magnitude_db(&self, freq: f64) -> f64 {
        gain_to_db(self.magnitude(freq))
    }

    /// Phase at `freq` Hz in radians.
    pub fn phase(&self, freq: f64) -> f64 {
        self.freq_response(freq).arg()
    }

    /// Group delay at `freq` Hz, in samples.
    pub fn group_delay(&self, freq: f64) -> f64 {
        tf1_cascade_group_delay(&self.coeffs, hz_to_normalized(freq, self.sample_rate))
    }

    /// Gain at DC, computed from the discrete coefficients.
    pub fn dc_gain(&self) -> f64 {
        self.coeffs.iter().map(Tf1::dc_gain).product()
    }

    /// z-plane pole of every section.
    pub fn poles(&self) -> Vec<f64> {
        self.coeffs.iter().map(Tf1::pole).collect()
    }

    /// z-plane zero of every section. Sections never have `b0 == 0`, so
    /// every zero is finite.
    pub fn zeros(&self) -> Vec<f64> {
        self.coeffs
            .iter()
            .map(|c| c.zero().unwrap_or(f64::INFINITY))
            .collect()
    }

    /// Whether every pole is strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.coeffs.iter().all(|c| c.pole().abs() < 1.0)
    }
}
