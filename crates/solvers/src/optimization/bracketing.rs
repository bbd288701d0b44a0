//! Bracketing search for single-variable optimization.
//!
//! # Algorithm
//!
//! The search starts from a triple `a < b < c` whose middle point has a lower
//! objective than both ends, so a local minimum lies in `(a, c)`. Each
//! iteration evaluates `d`, the midpoint of the larger of `[a, b]` and
//! `[b, c]`, and keeps whichever of the two sub-triples still has its lowest
//! objective in the middle:
//!
//! | position | `f(d) > f(b)` | otherwise   |
//! |----------|---------------|-------------|
//! | `d < b`  | `(d, b, c)`   | `(a, d, b)` |
//! | `d > b`  | `(a, b, d)`   | `(b, d, c)` |
//!
//! The outer width shrinks by at least a quarter over any two iterations, and
//! the search stops once `c - a <= x_abs_tol + x_rel_tol * |b|`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per interior evaluation. The initial triple
//! is evaluated silently and must be valid before iteration begins.
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or objective)
//!
//! A NaN objective is never offered to the observer; it ends the search with
//! [`Error::NanObjective`].
//!
//! Each event carries `best`, the current middle point, and `bounds`, the
//! outer points whose distance is the convergence signal. Observers can return
//! [`Action::StopEarly`] to halt immediately, or [`Action::AssumeWorse`] to
//! treat the new point as worse than `best`.

mod config;
mod error;
mod event;
mod solution;
mod triple;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Point};
pub use solution::{Solution, Status};
pub use triple::TripleError;

use nmecon_core::{Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::evaluate;

use triple::Triple;

/// Actions an observer can take during bracketing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current middle point.
    StopEarly,

    /// Treat the evaluated point as worse than the current middle point.
    ///
    /// Also recovers from model or problem errors at that point.
    AssumeWorse,
}

/// Finds a local minimum of the objective inside `triple`.
///
/// The points of `triple` must be strictly increasing, and the objective at
/// the middle point must be lower than at both ends.
///
/// # Errors
///
/// Returns an error if the triple is invalid, if the objective is NaN, or if
/// the model or problem fails and the observer does not recover with
/// [`Action::AssumeWorse`].
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    triple: [f64; 3],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, triple, config, observer, |v| v)
}

/// Finds a local minimum without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    triple: [f64; 3],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, triple, config, ())
}

/// Finds a local maximum of the objective inside `triple`.
///
/// The objective at the middle point must be higher than at both ends.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    triple: [f64; 3],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, triple, config, observer, |v| -v)
}

/// Finds a local maximum without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    triple: [f64; 3],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, triple, config, ())
}

/// Shared search loop.
///
/// `transform` maps objectives to scores that are minimized, so maximization
/// passes negation.
fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    triple: [f64; 3],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    triple::check_order(triple)?;

    let [a, b, c] = triple.map(|x| evaluate(model, problem, x));
    let (a, b, c) = (a?, b?, c?);

    let mut triple = Triple::new(Point::from(&a), Point::from(&b), Point::from(&c), &transform)?;
    let mut snapshot = b.snapshot;

    for iter in 1..=config.max_iters() {
        if triple.is_converged(config) {
            return Ok(Solution::new(&triple, snapshot, Status::Converged, iter - 1));
        }

        let x = triple.probe();
        let best = triple.middle();
        let bounds = triple.bounds();

        let point = match evaluate(model, problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                let event = Event::Evaluated {
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    best,
                    bounds,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        return Ok(Solution::new(
                            &triple,
                            snapshot,
                            Status::StoppedByObserver,
                            iter,
                        ));
                    }
                    Some(Action::AssumeWorse) => Point::new(x, transform(f64::INFINITY)),
                    None => {
                        if transform(point.objective) <= transform(best.objective) {
                            snapshot = eval.snapshot;
                        }
                        point
                    }
                }
            }
            Err(err) => match Event::emit_failure(x, best, bounds, &err, &mut observer) {
                Some(Action::StopEarly) => {
                    return Ok(Solution::new(
                        &triple,
                        snapshot,
                        Status::StoppedByObserver,
                        iter,
                    ));
                }
                Some(Action::AssumeWorse) => Point::new(x, transform(f64::INFINITY)),
                None => return Err(err.into()),
            },
        };

        triple.insert(point, &transform);
    }

    let status = if triple.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(Solution::new(&triple, snapshot, status, config.max_iters()))
}

impl<I, O> Solution<I, O> {
    fn new(triple: &Triple, snapshot: Snapshot<I, O>, status: Status, iters: usize) -> Self {
        let middle = triple.middle();
        Self {
            status,
            x: middle.x,
            objective: middle.objective,
            bounds: triple.bounds(),
            snapshot,
            iters,
        }
    }
}
