// SPDX-License-Identifier: LGPL-3.0-or-later

//! Core data types for first-order filter sections.
//!
//! A first-order section has one zero and one pole. Its coefficients are
//! stored normalized so that the output coefficient is implicitly `1`:
//!
//! ```text
//!   y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]
//! ```
//!
//! `a1` keeps the sign it has in the denominator `1 + a1*z^-1`, so the pole
//! sits at `z = -a1`.

/// Discrete-time coefficients of a single one-zero/one-pole section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Tf1 {
    pub b0: f64,
    pub b1: f64,
    pub a1: f64,
}

impl Default for Tf1 {
    /// Identity section: passes the input unchanged.
    fn default() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            a1: 0.0,
        }
    }
}

impl Tf1 {
    /// Location of the section's pole in the z-plane.
    #[inline]
    pub fn pole(&self) -> f64 {
        -self.a1
    }

    /// Location of the section's zero in the z-plane.
    ///
    /// Returns `None` when `b0 == 0` (the zero sits at infinity).
    #[inline]
    pub fn zero(&self) -> Option<f64> {
        if self.b0 == 0.0 {
            None
        } else {
            Some(-self.b1 / self.b0)
        }
    }

    /// Gain at DC (`z = 1`).
    #[inline]
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1) / (1.0 + self.a1)
    }
}

/// Two-sample memory of a first-order section.
///
/// Holds the previous input and the previous output of the recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Tf1State {
    pub prev_in: f64,
    pub prev_out: f64,
}

impl Tf1State {
    /// Reset the memory to zero (clear filter state).
    #[inline]
    pub fn reset(&mut self) {
        self.prev_in = 0.0;
        self.prev_out = 0.0;
    }

    /// Whether the memory is all zeros.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.prev_in == 0.0 && self.prev_out == 0.0
    }
}
