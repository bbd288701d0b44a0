#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nmecon_observers::Record;
use nmecon_solvers::approximation::chebyshev::Chebyshev;

/// What a method produces: a point for root finders, a polynomial for
/// approximation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Estimate {
    Point(f64),
    Polynomial(Chebyshev),
}

impl Estimate {
    /// Returns the point, if this is a point estimate.
    #[must_use]
    pub fn point(&self) -> Option<f64> {
        match self {
            Self::Point(x) => Some(*x),
            Self::Polynomial(_) => None,
        }
    }

    /// Returns the polynomial, if this is a polynomial estimate.
    #[must_use]
    pub fn polynomial(&self) -> Option<&Chebyshev> {
        match self {
            Self::Point(_) => None,
            Self::Polynomial(p) => Some(p),
        }
    }
}

impl From<f64> for Estimate {
    fn from(x: f64) -> Self {
        Self::Point(x)
    }
}

impl From<Chebyshev> for Estimate {
    fn from(p: Chebyshev) -> Self {
        Self::Polynomial(p)
    }
}

/// One iteration of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Position in the trace, starting at 0.
    pub iter: usize,
    pub estimate: Estimate,
    /// Magnitude of the convergence signal at `estimate`.
    pub residual: f64,
}

/// The ordered iterations of a run, one [`Step`] per iteration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergenceTrace {
    steps: Vec<Step>,
}

impl ConvergenceTrace {
    /// Builds a trace from recorded iterations, numbering them from 0.
    pub(crate) fn from_records<T: Into<Estimate>>(records: Vec<Record<T>>) -> Self {
        let steps = records
            .into_iter()
            .enumerate()
            .map(|(iter, record)| Step {
                iter,
                estimate: record.estimate.into(),
                residual: record.residual.abs(),
            })
            .collect();
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a ConvergenceTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_steps_and_stores_magnitudes() {
        let records = vec![
            Record {
                estimate: 1.5,
                residual: 0.25,
            },
            Record {
                estimate: 1.25,
                residual: -0.4375,
            },
        ];

        let trace = ConvergenceTrace::from_records(records);

        assert_eq!(trace.len(), 2);
        let iters: Vec<usize> = trace.iter().map(|s| s.iter).collect();
        assert_eq!(iters, vec![0, 1]);
        assert_eq!(trace.steps()[1].estimate, Estimate::Point(1.25));
        assert_eq!(trace.steps()[1].residual, 0.4375);
    }
}
