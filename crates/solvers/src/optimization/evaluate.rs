use thiserror::Error;

use nmecon_core::{Model, OptimizationProblem, Snapshot};

/// An objective value at a point, with the model call that produced it.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub objective: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a one-variable objective.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),

    /// The objective cannot be ordered against other points.
    #[error("objective is NaN at x = {x}")]
    NanObjective { x: f64 },
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<1>>::Error>,
>;

/// Evaluates the objective at `x`.
///
/// Infinite objectives pass through and order against finite ones as
/// expected. A NaN objective is an error.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or objective
/// computation fails, or if the objective is NaN.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    if objective.is_nan() {
        return Err(EvalError::NanObjective { x });
    }

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}
