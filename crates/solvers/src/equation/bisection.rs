//! Bisection for single-variable root finding.
//!
//! # Algorithm
//!
//! Bisection keeps an interval `[left, right]` whose endpoint residuals have
//! opposite signs. Each iteration evaluates the midpoint and keeps the half
//! that still contains the sign change, halving the interval.
//!
//! After `k` iterations the interval has width `(b - a) / 2^k`, and the
//! midpoint evaluated on iteration `k` lies on its boundary. The solver stops
//! once that width satisfies `x_abs_tol + x_rel_tol * |mid|`, so an absolute
//! tolerance `tol` is met within `ceil(log2((b - a) / tol))` iterations. It
//! also stops as soon as a residual satisfies `residual_tol`.
//!
//! # Observer Events
//!
//! - [`Event::Left`] and [`Event::Right`]: the endpoint evaluations
//! - [`Event::Midpoint`]: one per iteration, with the current bracket
//!
//! Observers can return [`Action::StopEarly`] to halt with the best point
//! seen so far, or [`Action::AssumeResidualSign`] to continue past a failed
//! evaluation with a sign chosen from domain knowledge.

mod action;
mod best;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use nmecon_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use best::Best;
use bracket::Bounds;

/// Finds a root of the equation using the bisection method.
///
/// The observer sees every evaluation, endpoints included.
/// See the [module docs](self) for convergence and observer details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not bracket a sign
/// change, if a midpoint residual is not finite, or if the model or problem
/// fails and the observer does not recover with [`Action::AssumeResidualSign`].
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    let mut best = Best::empty();

    let (left_eval, next) = observe(model, problem, left, Site::Left, &mut observer)?;
    let Next::Continue(left_sign) = next else {
        return best.with(left_eval).finish(Status::StoppedByObserver, 0);
    };
    best = best.with(left_eval);

    let (right_eval, next) = observe(model, problem, right, Site::Right, &mut observer)?;
    let Next::Continue(right_sign) = next else {
        return best.with(right_eval).finish(Status::StoppedByObserver, 0);
    };
    best = best.with(right_eval);

    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0);
    }

    let mut bracket = Bracket::new(bounds, left_sign, right_sign)?;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let site = Site::Midpoint {
            iter,
            bracket: &bracket,
        };

        let (mid_eval, next) = observe(model, problem, mid, site, &mut observer)?;
        let Next::Continue(sign) = next else {
            return best.with(mid_eval).finish(Status::StoppedByObserver, iter);
        };

        bracket.shrink(mid, sign);

        let residual_converged = mid_eval
            .as_ref()
            .is_some_and(|eval| eval.residual().abs() <= config.residual_tol());
        let x_converged = bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol());

        if residual_converged || x_converged {
            return match mid_eval {
                Some(eval) => Ok(Solution::from_eval(eval, Status::Converged, iter)),
                None => best.finish(Status::Converged, iter),
            };
        }

        best = best.with(mid_eval);
    }

    best.finish(Status::MaxIters, config.max_iters())
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a midpoint residual is not
/// finite, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Where an evaluation happens within the bisection.
#[derive(Clone, Copy)]
enum Site<'b> {
    Left,
    Right,
    Midpoint { iter: usize, bracket: &'b Bracket },
}

/// How the loop proceeds after an evaluation.
enum Next {
    /// Update the bracket as if the residual had this sign.
    Continue(Sign),
    Stop,
}

/// Evaluates at `x`, emits the matching event, and decides how to proceed.
///
/// An observer action takes precedence over the evaluation outcome: a stop
/// request ends the search even after a failure, and an assumed sign both
/// recovers from a failure and overrides a real residual. Without an action,
/// a failed or non-finite evaluation is an error.
///
/// The returned evaluation is `None` when it failed, had a non-finite
/// residual, or the observer assumed its sign. Only real evaluations are
/// eligible to become the best point.
fn observe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    site: Site<'_>,
    observer: &mut Obs,
) -> Result<(Option<Evaluation<M::Input, M::Output, 1>>, Next), Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let result = evaluate(model, problem, [x]);

    let event = match site {
        Site::Left => Event::Left { x, result: &result },
        Site::Right => Event::Right { x, result: &result },
        Site::Midpoint { iter, bracket } => Event::Midpoint {
            iter,
            x,
            bracket,
            result: &result,
        },
    };
    let action = observer.observe(&event);

    let outcome = match result {
        Ok(eval) if eval.residual().is_finite() => Ok(eval),
        Ok(eval) => Err(match site {
            Site::Midpoint { .. } => Error::NonFiniteResidual {
                x,
                residual: eval.residual(),
            },
            Site::Left | Site::Right => BracketError::NonFiniteResidual.into(),
        }),
        Err(error) => Err(Error::from(error)),
    };

    match (action, outcome) {
        (Some(Action::StopEarly), outcome) => Ok((outcome.ok(), Next::Stop)),
        (Some(Action::AssumeResidualSign(sign)), _) => Ok((None, Next::Continue(sign))),
        (None, Ok(eval)) => {
            let sign = Sign::of(eval.residual());
            Ok((Some(eval), Next::Continue(sign)))
        }
        (None, Err(error)) => Err(error),
    }
}
