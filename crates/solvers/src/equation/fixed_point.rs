//! Damped fixed-point iteration.
//!
//! Solves `x = g(x)` by successive approximation. The problem's residual is
//! read as `g(x) - x`, so any [`EquationProblem<1>`] whose residual has that
//! form can be iterated:
//!
//! ```text
//! x_{n+1} = x_n + damping * (g(x_n) - x_n)
//! ```
//!
//! With `damping = 1` this is plain successive approximation. Smaller values
//! trade speed for stability when `g` is only weakly contracting or
//! oscillates around its fixed point.
//!
//! [`EquationProblem<1>`]: nmecon_core::EquationProblem

mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use std::error::Error as StdError;

use nmecon_core::{EquationProblem, Model, Observer, Snapshot};

use crate::equation::{EvalError, Evaluation, evaluate};

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}

/// Event emitted by the fixed-point solver.
pub enum Event<'a, I, O> {
    /// Evaluation of the initial guess.
    Initial { eval: &'a Evaluation<I, O, 1> },

    /// A completed iteration.
    Step {
        /// Iteration counter, starting at 1.
        iter: usize,
        /// Signed step taken from the previous iterate.
        step: f64,
        /// Evaluation at the new iterate.
        eval: &'a Evaluation<I, O, 1>,
    },
}

impl<'a, I, O> Event<'a, I, O> {
    /// Returns the evaluation carried by this event.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        match self {
            Event::Initial { eval } | Event::Step { eval, .. } => *eval,
        }
    }

    /// Returns the iteration counter for step events.
    #[must_use]
    pub fn iter(&self) -> Option<usize> {
        match self {
            Event::Initial { .. } => None,
            Event::Step { iter, .. } => Some(*iter),
        }
    }
}

/// Indicates how the fixed-point solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
    /// The iteration produced a non-finite iterate or residual.
    Diverged,
}

/// The result of a fixed-point iteration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Estimate of the fixed point.
    pub x: f64,
    /// `g(x) - x` at the reported estimate.
    pub residual: f64,
    /// Snapshot at the reported estimate.
    pub snapshot: Snapshot<I, O>,
    /// Number of completed iterations.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    fn from_eval(eval: Evaluation<I, O, 1>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residual(),
            snapshot: eval.snapshot,
            iters,
        }
    }
}

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial guess is not finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

/// Iterates toward a fixed point starting from `x0`.
///
/// The observer receives [`Event::Initial`] for the starting point and one
/// [`Event::Step`] per iteration. On divergence the last finite iterate is
/// reported.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the model or problem fails
/// during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }

    let mut current = evaluate(model, problem, [x0])?;

    if let Some(Action::StopEarly) = observer.observe(&Event::Initial { eval: &current }) {
        return Ok(Solution::from_eval(current, Status::StoppedByObserver, 0));
    }
    if !current.residual().is_finite() {
        return Ok(Solution::from_eval(current, Status::Diverged, 0));
    }
    if current.residual().abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(current, Status::Converged, 0));
    }

    for iter in 1..=config.max_iters() {
        let step = config.damping() * current.residual();
        let next_x = current.x[0] + step;
        if !next_x.is_finite() {
            return Ok(Solution::from_eval(current, Status::Diverged, iter - 1));
        }

        let next = evaluate(model, problem, [next_x])?;
        if !next.residual().is_finite() {
            return Ok(Solution::from_eval(current, Status::Diverged, iter - 1));
        }

        let event = Event::Step {
            iter,
            step,
            eval: &next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(next, Status::StoppedByObserver, iter));
        }

        let converged =
            step.abs() <= config.x_abs_tol() || next.residual().abs() <= config.residual_tol();
        current = next;

        if converged {
            return Ok(Solution::from_eval(current, Status::Converged, iter));
        }
    }

    Ok(Solution::from_eval(
        current,
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the model or problem fails
/// during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
