// SPDX-License-Identifier: LGPL-3.0-or-later

//! Buffer math used around the filter cascade.
//!
//! - [`scalar`]: per-element gain and offset operations
//! - [`horizontal`]: reductions (peak, RMS)

pub mod horizontal;
pub mod scalar;
