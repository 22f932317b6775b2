// SPDX-License-Identifier: LGPL-3.0-or-later

//! Colored noise generator.
//!
//! LCG white noise is shaped by a [`SpectralTilt`] cascade spanning
//! 10 Hz up to 20 kHz (or 40% of the sample rate, whichever is lower) to
//! produce white, pink, red, blue, violet, or arbitrary-slope noise.
//! Amplitude and offset are applied after coloring, so the offset is never
//! filtered.

use num_complex::Complex64;
use tilt_dsp_lib::math::scalar::{scale_offset, scale_offset_add};

use crate::consts::{
    COLOR_FREQ_MAX, COLOR_FREQ_MIN, COLOR_NYQUIST_FRACTION, DFL_COLOR_SECTIONS, DFL_SAMPLE_RATE,
};
use crate::error::TiltError;
use crate::filters::spectral_tilt::SpectralTilt;
use crate::noise::lcg::{Lcg, LcgDistribution};
use crate::units::{SlopeUnit, slope_to_alpha};

/// Color of noise (spectral characteristic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// Flat spectrum (alpha = 0).
    White,
    /// -3 dB/octave, power 1/f (alpha = -1/2).
    Pink,
    /// Red/brown noise, -6 dB/octave, power 1/f² (alpha = -1).
    Red,
    /// +3 dB/octave (alpha = +1/2).
    Blue,
    /// +6 dB/octave (alpha = +1).
    Violet,
    /// User-defined slope, see [`NoiseGenerator::set_color_slope`].
    Arbitrary,
}

const BUF_LIM_SIZE: usize = 256;

const UPD_COLOR: u8 = 1 << 0;

/// Colored noise generator.
///
/// # Examples
/// ```
/// use tilt_dsp_units::noise::{NoiseColor, NoiseGenerator};
///
/// let mut noise_gen = NoiseGenerator::new();
/// noise_gen.init_with_seed(1234);
/// noise_gen.set_sample_rate(48000.0);
/// noise_gen.set_noise_color(NoiseColor::Pink);
/// noise_gen.set_amplitude(0.5);
///
/// let mut output = vec![0.0; 1000];
/// noise_gen.process_overwrite(&mut output);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    lcg: Lcg,
    tilt: SpectralTilt,

    color: NoiseColor,
    sample_rate: f64,
    amplitude: f32,
    offset: f32,

    color_order: usize,
    color_slope: f64,
    color_slope_unit: SlopeUnit,

    update_flags: u8,
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseGenerator {
    /// Create a white noise generator at 48 kHz, unit amplitude, no offset.
    pub fn new() -> Self {
        Self {
            lcg: Lcg::new(),
            tilt: SpectralTilt::new(),
            color: NoiseColor::White,
            sample_rate: DFL_SAMPLE_RATE,
            amplitude: 1.0,
            offset: 0.0,
            color_order: DFL_COLOR_SECTIONS,
            color_slope: 0.0,
            color_slope_unit: SlopeUnit::NeperPerNeper,
            update_flags: UPD_COLOR,
        }
    }

    /// Restart the noise sequence from `seed` and clear the coloring
    /// filter memory.
    pub fn init_with_seed(&mut self, seed: u32) {
        self.lcg.init_with_seed(seed);
        self.tilt.clear();
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        if self.sample_rate == sample_rate {
            return;
        }
        self.sample_rate = sample_rate;
        self.update_flags |= UPD_COLOR;
    }

    pub fn set_distribution(&mut self, dist: LcgDistribution) {
        self.lcg.set_distribution(dist);
    }

    pub fn set_noise_color(&mut self, color: NoiseColor) {
        if self.color == color {
            return;
        }
        self.color = color;
        self.update_flags |= UPD_COLOR;
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Set the number of sections of the coloring filter.
    pub fn set_coloring_order(&mut self, order: usize) {
        if self.color_order == order {
            return;
        }
        self.color_order = order;
        self.update_flags |= UPD_COLOR;
    }

    /// Set the slope used by [`NoiseColor::Arbitrary`].
    pub fn set_color_slope(&mut self, slope: f64, unit: SlopeUnit) {
        if self.color_slope == slope && self.color_slope_unit == unit {
            return;
        }
        self.color_slope = slope;
        self.color_slope_unit = unit;
        self.update_flags |= UPD_COLOR;
    }

    pub fn noise_color(&self) -> NoiseColor {
        self.color
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Slope exponent of the current color.
    pub fn color_alpha(&self) -> f64 {
        match self.color {
            NoiseColor::White => 0.0,
            NoiseColor::Pink => -0.5,
            NoiseColor::Red => -1.0,
            NoiseColor::Blue => 0.5,
            NoiseColor::Violet => 1.0,
            NoiseColor::Arbitrary => slope_to_alpha(self.color_slope, self.color_slope_unit),
        }
    }

    /// Coloring band `(start, bandwidth)` in Hz for the current sample rate.
    pub fn color_band(&self) -> (f64, f64) {
        let f1 = COLOR_FREQ_MAX.min(COLOR_NYQUIST_FRACTION * self.sample_rate);
        (COLOR_FREQ_MIN, (f1 - COLOR_FREQ_MIN).max(0.0))
    }

    /// Error of the last coloring filter rebuild, if it failed.
    ///
    /// While set, the generator keeps its previous coloring (white noise
    /// if none was ever built).
    pub fn last_error(&self) -> Option<&TiltError> {
        self.tilt.last_error()
    }

    fn update_settings(&mut self) {
        if self.update_flags == 0 {
            return;
        }

        if (self.update_flags & UPD_COLOR) != 0 {
            let (f0, bw) = self.color_band();
            let alpha = self.color_alpha();
            self.tilt
                .set_sample_rate(self.sample_rate)
                .set_sections(self.color_order)
                .set_start_frequency(f0)
                .set_bandwidth(bw)
                .set_alpha(alpha);
            // Failure is logged and kept in last_error
            let _ = self.tilt.update();
        }

        self.update_flags = 0;
    }

    /// Generate colored, unscaled noise.
    fn do_process(&mut self, dst: &mut [f32]) {
        self.lcg.process_overwrite(dst);
        if self.color != NoiseColor::White {
            self.tilt.process_inplace(dst);
        }
    }

    /// Output noise to a destination buffer, overwriting its content.
    pub fn process_overwrite(&mut self, dst: &mut [f32]) {
        self.update_settings();
        self.do_process(dst);
        scale_offset(dst, self.amplitude, self.offset);
    }

    /// Output noise to the destination buffer in additive mode.
    ///
    /// If `src` is `None`, it's treated as zeros: `dst[i] = noise[i]`.
    /// Otherwise: `dst[i] = src[i] + noise[i]`.
    pub fn process_add(&mut self, dst: &mut [f32], src: Option<&[f32]>) {
        let Some(src) = src else {
            self.process_overwrite(dst);
            return;
        };
        self.update_settings();

        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(&src[..n]);

        let mut temp = [0.0_f32; BUF_LIM_SIZE];
        for chunk in dst[..n].chunks_mut(BUF_LIM_SIZE) {
            let noise = &mut temp[..chunk.len()];
            self.do_process(noise);
            scale_offset_add(chunk, noise, self.amplitude, self.offset);
        }
    }

    /// Complex response of the coloring filter and amplitude at `freq` Hz.
    pub fn freq_response(&mut self, freq: f64) -> Complex64 {
        self.update_settings();
        let h = if self.color == NoiseColor::White {
            Complex64::new(1.0, 0.0)
        } else {
            self.tilt.freq_response(freq)
        };
        h * self.amplitude as f64
    }
}
