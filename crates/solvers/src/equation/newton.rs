//! Newton–Raphson for single-variable root finding.
//!
//! # Algorithm
//!
//! From the current iterate `x` with residual `f(x)`, Newton's method steps
//! to `x - f(x) / f'(x)`. Near a simple root the error shrinks
//! quadratically, `e_{n+1} ≈ C e_n^2`, but convergence is not guaranteed from
//! a poor initial guess.
//!
//! The derivative comes from [`EquationProblem::jacobian`] when the problem
//! supplies one, and otherwise from a central finite difference of the
//! residual with step `fd_step * max(1, |x|)`.
//!
//! # Stopping
//!
//! - [`Status::Converged`]: `|step| <= x_abs_tol` or `|f(x)| <= residual_tol`
//! - [`Status::ZeroDerivative`]: `|f'(x)| < min_derivative`
//! - [`Status::NonFinite`]: the iterate or its residual stopped being finite
//! - [`Status::MaxIters`]: iteration budget exhausted
//!
//! Whenever the solver stops without converging it reports the last iterate
//! with a finite residual.
//!
//! [`EquationProblem::jacobian`]: nmecon_core::EquationProblem::jacobian

mod config;
mod error;
mod event;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use nmecon_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}

/// Finds a root of the equation using Newton's method from `x0`.
///
/// The observer receives [`Event::Initial`] for the starting point and one
/// [`Event::Step`] per iteration.
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
        return Ok(Solution::from_eval(current, Status::NonFinite, 0));
    }
    if current.residual().abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(current, Status::Converged, 0));
    }

    for iter in 1..=config.max_iters() {
        let derivative = derivative(model, problem, &current, config)?;
        if !derivative.is_finite() {
            return Ok(Solution::from_eval(current, Status::NonFinite, iter - 1));
        }
        if derivative.abs() < config.min_derivative() {
            return Ok(Solution::from_eval(current, Status::ZeroDerivative, iter - 1));
        }

        let step = -current.residual() / derivative;
        let next_x = current.x[0] + step;
        if !next_x.is_finite() {
            return Ok(Solution::from_eval(current, Status::NonFinite, iter - 1));
        }

        let next = evaluate(model, problem, [next_x])?;
        if !next.residual().is_finite() {
            return Ok(Solution::from_eval(current, Status::NonFinite, iter - 1));
        }

        let event = Event::Step {
            iter,
            derivative,
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

/// Runs Newton's method without observation.
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

/// Returns the residual derivative at the current evaluation.
fn derivative<M, P>(
    model: &M,
    problem: &P,
    current: &Evaluation<M::Input, M::Output, 1>,
    config: &Config,
) -> Result<f64, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let snapshot = &current.snapshot;
    if let Some(jacobian) = problem.jacobian(&current.x, &snapshot.input, &snapshot.output) {
        let [[derivative]] = jacobian.map_err(Error::problem)?;
        return Ok(derivative);
    }

    let x = current.x[0];
    let h = config.fd_step() * x.abs().max(1.0);
    let forward = evaluate(model, problem, [x + h])?;
    let backward = evaluate(model, problem, [x - h])?;

    Ok((forward.residual() - backward.residual()) / (2.0 * h))
}
