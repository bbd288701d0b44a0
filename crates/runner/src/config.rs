use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::InvalidInput;

/// The numerical method a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MethodKind {
    /// Interval halving on a sign change.
    Bisection,
    /// Newton-Raphson from an initial guess.
    Newton,
    /// Successive approximation of `x = g(x)`.
    FixedPoint,
    /// Chebyshev polynomial approximation over an interval.
    PolynomialApproximation,
    /// Bracketing search for a local minimum inside a triple of points.
    Bracketing,
}

impl MethodKind {
    /// Returns whether the method starts from an interval rather than a
    /// single guess.
    #[must_use]
    pub fn needs_interval(self) -> bool {
        matches!(self, Self::Bisection | Self::PolynomialApproximation)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bisection => "bisection",
            Self::Newton => "newton",
            Self::FixedPoint => "fixed-point",
            Self::PolynomialApproximation => "polynomial approximation",
            Self::Bracketing => "bracketing search",
        })
    }
}

/// Tolerance, iteration budget, and method for a run.
///
/// Fields are public so the config can be written literally or deserialized;
/// [`run`](crate::run) calls [`validate`](Self::validate) before doing any
/// work.
///
/// The single tolerance is read per method:
///
/// | method | converged when |
/// |---|---|
/// | bisection | bracket width or `\|f(x)\|` is within `tolerance` |
/// | Newton | step size or `\|f(x)\|` is within `tolerance` |
/// | fixed point | step size or `\|g(x) - x\|` is within `tolerance` |
/// | polynomial approximation | largest error on the check grid is within `tolerance` |
/// | bracketing search | outer width of the triple is within `tolerance` |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodConfig {
    pub tolerance: f64,
    pub max_iters: usize,
    pub kind: MethodKind,
}

impl MethodConfig {
    #[must_use]
    pub fn new(kind: MethodKind, tolerance: f64, max_iters: usize) -> Self {
        Self {
            tolerance,
            max_iters,
            kind,
        }
    }

    /// Checks that the tolerance and iteration budget are positive.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Tolerance`] if `tolerance` is not finite and
    /// positive, or [`InvalidInput::MaxIters`] if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(InvalidInput::Tolerance(self.tolerance));
        }
        if self.max_iters == 0 {
            return Err(InvalidInput::MaxIters);
        }
        Ok(())
    }
}

/// Where a run starts: a single guess, an interval, or a bracketing triple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Initial {
    Guess(f64),
    Interval([f64; 2]),
    /// Points `a < b < c` with `f(b)` below both `f(a)` and `f(c)`.
    Triple([f64; 3]),
}

impl From<f64> for Initial {
    fn from(x: f64) -> Self {
        Self::Guess(x)
    }
}

impl From<[f64; 2]> for Initial {
    fn from(interval: [f64; 2]) -> Self {
        Self::Interval(interval)
    }
}

impl From<[f64; 3]> for Initial {
    fn from(triple: [f64; 3]) -> Self {
        Self::Triple(triple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_positive_values() {
        let config = MethodConfig::new(MethodKind::Newton, 1e-8, 10);
        assert_eq!(config.validate(), Ok(()));

        for tolerance in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let config = MethodConfig { tolerance, ..config };
            assert!(matches!(
                config.validate(),
                Err(InvalidInput::Tolerance(_))
            ));
        }

        let config = MethodConfig {
            max_iters: 0,
            ..config
        };
        assert_eq!(config.validate(), Err(InvalidInput::MaxIters));
    }

    #[test]
    fn interval_methods() {
        assert!(MethodKind::Bisection.needs_interval());
        assert!(MethodKind::PolynomialApproximation.needs_interval());
        assert!(!MethodKind::Newton.needs_interval());
        assert!(!MethodKind::FixedPoint.needs_interval());
        assert!(!MethodKind::Bracketing.needs_interval());
    }

    #[test]
    fn initial_state_from_arrays() {
        assert_eq!(Initial::from(1.5), Initial::Guess(1.5));
        assert_eq!(Initial::from([0.0, 2.0]), Initial::Interval([0.0, 2.0]));
        assert_eq!(
            Initial::from([0.0, 1.0, 3.0]),
            Initial::Triple([0.0, 1.0, 3.0])
        );
    }
}
