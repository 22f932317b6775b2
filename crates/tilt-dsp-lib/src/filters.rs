// SPDX-License-Identifier: LGPL-3.0-or-later

//! First-order filter processing (static coefficients).
//!
//! Each section runs the direct-form-I recurrence
//! ```text
//!   y        = b0 * x + b1 * prev_in - a1 * prev_out
//!   prev_in  = x
//!   prev_out = y
//! ```
//!
//! Cascades are processed section-major for blocks: the whole block goes
//! through section 0, then section 1 and so on. Each section only sees its
//! own input history, so the output is bit-identical to running every sample
//! through all sections before moving to the next sample.

use num_complex::Complex64;

use crate::types::{Tf1, Tf1State};

/// Process one sample through a single section.
#[inline(always)]
pub fn tf1_process_sample(c: &Tf1, st: &mut Tf1State, x: f64) -> f64 {
    let y = c.b0 * x + c.b1 * st.prev_in - c.a1 * st.prev_out;
    st.prev_in = x;
    st.prev_out = y;
    y
}

/// Process audio from `src` into `dst` through a single section.
///
/// Output length is `min(dst.len(), src.len())`.
pub fn tf1_process(dst: &mut [f64], src: &[f64], c: &Tf1, st: &mut Tf1State) {
    let (b0, b1, a1) = (c.b0, c.b1, c.a1);
    let mut x1 = st.prev_in;
    let mut y1 = st.prev_out;

    for (out, &x) in dst.iter_mut().zip(src.iter()) {
        let y = b0 * x + b1 * x1 - a1 * y1;
        x1 = x;
        y1 = y;
        *out = y;
    }

    st.prev_in = x1;
    st.prev_out = y1;
}

/// Process audio in-place through a single section.
pub fn tf1_process_inplace(buf: &mut [f64], c: &Tf1, st: &mut Tf1State) {
    let (b0, b1, a1) = (c.b0, c.b1, c.a1);
    let mut x1 = st.prev_in;
    let mut y1 = st.prev_out;

    for sample in buf.iter_mut() {
        let x = *sample;
        let y = b0 * x + b1 * x1 - a1 * y1;
        x1 = x;
        y1 = y;
        *sample = y;
    }

    st.prev_in = x1;
    st.prev_out = y1;
}

/// Process one sample through a cascade of sections, in order.
///
/// `coeffs` and `states` must have the same length.
#[inline]
pub fn tf1_cascade_process_sample(coeffs: &[Tf1], states: &mut [Tf1State], x: f64) -> f64 {
    debug_assert_eq!(coeffs.len(), states.len(), "cascade length mismatch");
    let mut signal = x;
    for (c, st) in coeffs.iter().zip(states.iter_mut()) {
        signal = tf1_process_sample(c, st, signal);
    }
    signal
}

/// Process audio in-place through a cascade of sections, in order.
pub fn tf1_cascade_process_inplace(buf: &mut [f64], coeffs: &[Tf1], states: &mut [Tf1State]) {
    debug_assert_eq!(coeffs.len(), states.len(), "cascade length mismatch");
    for (c, st) in coeffs.iter().zip(states.iter_mut()) {
        tf1_process_inplace(buf, c, st);
    }
}

/// Process audio from `src` into `dst` through a cascade of sections.
///
/// Output length is `min(dst.len(), src.len())`. Does not allocate.
pub fn tf1_cascade_process(dst: &mut [f64], src: &[f64], coeffs: &[Tf1], states: &mut [Tf1State]) {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
    tf1_cascade_process_inplace(&mut dst[..n], coeffs, states);
}

/// Complex frequency response of one section at normalized angular
/// frequency `w` (radians per sample).
pub fn tf1_freq_response(c: &Tf1, w: f64) -> Complex64 {
    // z^-1 = e^(-jw)
    let zinv = Complex64::from_polar(1.0, -w);
    (c.b0 + zinv * c.b1) / (1.0 + zinv * c.a1)
}

/// Complex frequency response of a cascade at normalized angular frequency
/// `w` (radians per sample).
pub fn tf1_cascade_freq_response(coeffs: &[Tf1], w: f64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, c| acc * tf1_freq_response(c, w))
}

/// Group delay of one section in samples at normalized angular frequency
/// `w`. Equals `-d(arg H)/dw`, evaluated in closed form.
pub fn tf1_group_delay(c: &Tf1, w: f64) -> f64 {
    let zinv = Complex64::from_polar(1.0, -w);
    let num = c.b1 * zinv / (c.b0 + c.b1 * zinv);
    let den = c.a1 * zinv / (1.0 + c.a1 * zinv);
    num.re - den.re
}

/// Group delay of a cascade in samples: the sum over its sections.
pub fn tf1_cascade_group_delay(coeffs: &[Tf1], w: f64) -> f64 {
    coeffs.iter().map(|c| tf1_group_delay(c, w)).sum()
}
