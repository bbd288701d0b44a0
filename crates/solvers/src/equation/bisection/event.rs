use nmecon_core::{EquationProblem, Model};

use crate::equation::EvaluateResult;

use super::Bracket;

/// Event emitted by the bisection solver for each evaluation.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Left bracket endpoint evaluation.
    Left {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },

    /// Right bracket endpoint evaluation.
    Right {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },

    /// Midpoint evaluation, one per iteration.
    Midpoint {
        /// Iteration counter, starting at 1.
        iter: usize,
        x: f64,
        /// Bracket the midpoint was taken from.
        bracket: &'a Bracket,
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Left { x, .. } | Event::Right { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the iteration counter for midpoint events.
    #[must_use]
    pub fn iter(&self) -> Option<usize> {
        match self {
            Event::Midpoint { iter, .. } => Some(*iter),
            Event::Left { .. } | Event::Right { .. } => None,
        }
    }

    /// Returns the evaluation result.
    #[must_use]
    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        match self {
            Event::Left { result, .. }
            | Event::Right { result, .. }
            | Event::Midpoint { result, .. } => *result,
        }
    }
}
