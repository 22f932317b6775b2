// SPDX-License-Identifier: LGPL-3.0-or-later

//! One-zero/one-pole section design with unity DC gain.
//!
//! A section starts from a prewarped zero `b0_raw` and pole `a0_raw`
//! (rad/s) and the analog prototype
//!
//! ```text
//!   H(s) = g * (s + b0_raw) / (s + a0_raw),    g = a0_raw / b0_raw
//! ```
//!
//! The gain `g` pins `H(0) = 1`, so each section only shapes the slope and
//! the level of the whole cascade stays at unity at DC. The stored section
//! folds `g` in: `H(s) = (b1*s + b0) / (s + a0)` with `b1 = g`,
//! `b0 = g*b0_raw`, `a0 = a0_raw`.
//!
//! Discretization substitutes `s = c * (1 - z^-1) / (1 + z^-1)`:
//!
//! ```text
//!   d  = a0 + c
//!   b0' = (b0 + b1*c) / d
//!   b1' = (b0 - b1*c) / d
//!   a1' = (a0 - c) / d
//! ```
//!
//! With `a0 > 0` and `c > 0` the digital pole `-a1'` stays strictly inside
//! the unit circle.

use tilt_dsp_lib::types::Tf1;

use crate::error::TiltError;

/// Continuous-time section coefficients with the DC gain folded in.
///
/// Transfer function `(b1*s + b0) / (s + a0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub b0: f64,
    pub b1: f64,
    pub a0: f64,
}

impl Section {
    /// Gain of the analog prototype at DC (`s = 0`).
    pub fn dc_gain(&self) -> f64 {
        self.b0 / self.a0
    }

    /// Map the section to the z-plane with bilinear constant `c`.
    pub fn discretize(&self, c: f64) -> Tf1 {
        let d = self.a0 + c;
        Tf1 {
            b0: (self.b0 + self.b1 * c) / d,
            b1: (self.b0 - self.b1 * c) / d,
            a1: (self.a0 - c) / d,
        }
    }
}

/// Design section `index` from its prewarped zero and pole (rad/s).
///
/// Fails with `DegenerateSection` when the zero is exactly zero and with
/// `NumericOverflow` when the normalized coefficients are not finite.
pub fn design_section(index: usize, b0_raw: f64, a0_raw: f64) -> Result<Section, TiltError> {
    if b0_raw == 0.0 {
        return Err(TiltError::DegenerateSection { index });
    }

    let g = a0_raw / b0_raw;
    let section = Section {
        b0: g * b0_raw,
        b1: g,
        a0: a0_raw,
    };

    if !(section.b0.is_finite() && section.b1.is_finite() && section.a0.is_finite()) {
        return Err(TiltError::overflow("section gain", Some(index)));
    }

    Ok(section)
}
