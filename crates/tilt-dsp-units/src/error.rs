// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error type for cascade design.
//!
//! Every condition is detected while building a cascade. Processing a built
//! cascade never fails.

use std::error;
use std::fmt;

/// Reasons a spectral tilt cascade cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum TiltError {
    /// A shape parameter or the sample rate is out of its domain.
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    /// Section `index` cannot be realized with unity DC gain: its zero
    /// prewarps to exactly zero, or its discrete pole lands on the unit
    /// circle.
    DegenerateSection { index: usize },
    /// An intermediate value of the design is not finite.
    NumericOverflow {
        stage: &'static str,
        index: Option<usize>,
    },
    /// A pole of section `index` lies at or above the Nyquist frequency.
    AboveNyquist {
        index: usize,
        frequency: f64,
        nyquist: f64,
    },
}

impl TiltError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        TiltError::InvalidParameter { name, reason }
    }

    pub(crate) fn overflow(stage: &'static str, index: Option<usize>) -> Self {
        TiltError::NumericOverflow { stage, index }
    }
}

impl fmt::Display for TiltError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TiltError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            TiltError::DegenerateSection { index } => {
                write!(f, "section {index} is degenerate after discretization")
            }
            TiltError::NumericOverflow { stage, index: Some(i) } => {
                write!(f, "non-finite {stage} in section {i}")
            }
            TiltError::NumericOverflow { stage, index: None } => {
                write!(f, "non-finite {stage}")
            }
            TiltError::AboveNyquist {
                index,
                frequency,
                nyquist,
            } => write!(
                f,
                "pole of section {index} at {frequency:.3} Hz is not below Nyquist ({nyquist:.3} Hz)"
            ),
        }
    }
}

impl error::Error for TiltError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TiltError::invalid("sections", "must be at least 1").to_string(),
            "invalid parameter `sections`: must be at least 1"
        );
        assert_eq!(
            TiltError::DegenerateSection { index: 2 }.to_string(),
            "section 2 is degenerate after discretization"
        );
        assert_eq!(
            TiltError::overflow("pole ratio", None).to_string(),
            "non-finite pole ratio"
        );
        assert_eq!(
            TiltError::overflow("zero frequency", Some(3)).to_string(),
            "non-finite zero frequency in section 3"
        );
        assert_eq!(
            TiltError::AboveNyquist {
                index: 1,
                frequency: 30000.0,
                nyquist: 24000.0
            }
            .to_string(),
            "pole of section 1 at 30000.000 Hz is not below Nyquist (24000.000 Hz)"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn error::Error> = Box::new(TiltError::DegenerateSection { index: 0 });
        assert!(err.source().is_none());
    }
}
