use nmecon_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::{EvalError, Evaluation};

use super::Action;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub objective: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}

impl<I, O> From<&Evaluation<I, O>> for Point {
    fn from(eval: &Evaluation<I, O>) -> Self {
        Self::new(eval.x, eval.objective)
    }
}

/// Events emitted by the bracketing solver.
///
/// `best` is the middle point and `bounds` the outer points of the triple
/// being refined, both taken before the new point is inserted.
pub enum Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a probe point.
    Evaluated {
        point: Point,
        input: &'a M::Input,
        output: &'a M::Output,
        best: Point,
        bounds: [f64; 2],
    },

    /// Model evaluation failed.
    ModelFailed {
        x: f64,
        best: Point,
        bounds: [f64; 2],
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        x: f64,
        best: Point,
        bounds: [f64; 2],
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the probe x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the current middle point.
    #[must_use]
    pub fn best(&self) -> Point {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Returns the outer points `[a, c]` of the current triple.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { bounds, .. }
            | Self::ModelFailed { bounds, .. }
            | Self::ProblemFailed { bounds, .. } => *bounds,
        }
    }

    /// Emits a failure event and returns the observer's action.
    ///
    /// NaN objectives emit nothing and return `None`.
    pub(super) fn emit_failure<Obs>(
        x: f64,
        best: Point,
        bounds: [f64; 2],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(error) => observer.observe(&Event::ModelFailed {
                x,
                best,
                bounds,
                error,
            }),
            EvalError::Problem(error) => observer.observe(&Event::ProblemFailed {
                x,
                best,
                bounds,
                error,
            }),
            EvalError::NanObjective { .. } => None,
        }
    }
}
