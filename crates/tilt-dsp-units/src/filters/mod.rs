// SPDX-License-Identifier: LGPL-3.0-or-later

//! Spectral tilt design and processing.
//!
//! The design pipeline runs, per section index:
//!
//! [`ladder`] (s-plane pole/zero frequencies) → [`prewarp`] (bilinear
//! compensation) → [`section`] (unity DC gain one-zero/one-pole) →
//! discretization. [`cascade`] drives the pipeline and executes the result;
//! [`spectral_tilt`] wraps it as a lazily rebuilt `f32` processor.

pub mod cascade;
pub mod ladder;
pub mod prewarp;
pub mod section;
pub mod shape;
pub mod spectral_tilt;

pub use cascade::{Cascade, CascadeBuilder, build};
pub use shape::ShapeParameters;
pub use spectral_tilt::SpectralTilt;
