use thiserror::Error;

use nmecon_core::{ApproximationProblem, Model, Snapshot};

/// The result of evaluating an approximation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub value: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an approximation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or extract the value.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as ApproximationProblem>::Error>,
>;

/// Evaluates the model in the context of an approximation problem.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or value extraction fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: ApproximationProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let value = problem.value(&input, &output).map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        value,
        snapshot: Snapshot::new(input, output),
    })
}
