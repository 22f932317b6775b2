// SPDX-License-Identifier: LGPL-3.0-or-later

//! Design constants and processor defaults.

/// Floor applied to the start frequency before any design math (Hz).
///
/// A start frequency in `[0, FREQ_EPSILON)` is raised to this value so the
/// pole ratio and the prewarping anchor never divide by zero.
pub const FREQ_EPSILON: f64 = f64::EPSILON;

/// 20 * log10(2): dB per octave of a slope of one neper per neper.
pub const DB_PER_OCTAVE_PER_NEPER: f64 = 6.020_599_913_279_624;

/// 20 * log10(10): dB per decade of a slope of one neper per neper.
pub const DB_PER_DECADE_PER_NEPER: f64 = 20.0;

// Processor defaults

/// Default sample rate (Hz).
pub const DFL_SAMPLE_RATE: f64 = 48000.0;

/// Default number of cascaded sections.
pub const DFL_SECTIONS: usize = 12;

/// Default start frequency of the tilt band (Hz).
pub const DFL_START_FREQ: f64 = 20.0;

/// Default bandwidth of the tilt band (Hz). Puts the upper edge at 10 kHz.
pub const DFL_BANDWIDTH: f64 = 9980.0;

/// Default slope exponent (flat).
pub const DFL_ALPHA: f64 = 0.0;

// Noise coloring band

/// Lower edge of the noise coloring band (Hz).
pub const COLOR_FREQ_MIN: f64 = 10.0;

/// Upper edge of the noise coloring band (Hz), before the Nyquist limit.
pub const COLOR_FREQ_MAX: f64 = 20000.0;

/// Fraction of the sample rate the coloring band may reach.
pub const COLOR_NYQUIST_FRACTION: f64 = 0.4;

/// Default number of sections in the noise coloring filter.
pub const DFL_COLOR_SECTIONS: usize = 50;
