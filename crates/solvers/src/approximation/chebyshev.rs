//! Chebyshev polynomial approximation.
//!
//! A function on `[a, b]` is sampled at Chebyshev nodes (the zeros of
//! `T_m`, mapped onto the domain) and fitted by Chebyshev regression.
//! Sampling at these nodes avoids the oscillation that equally spaced
//! interpolation suffers near the interval ends.
//!
//! [`fit`] produces a single polynomial of a requested degree.
//! [`approximate`] raises the degree one step per iteration, starting from a
//! constant, until the largest absolute error on an evenly spaced check grid
//! falls within tolerance.

mod config;
mod error;
mod polynomial;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use polynomial::{Chebyshev, DomainError};

use nmecon_core::{ApproximationProblem, Model, Observer};

use crate::approximation::evaluate;

use polynomial::check_domain;

/// Control actions supported by [`approximate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the latest fit.
    StopEarly,
}

/// Emitted after each fit in [`approximate`].
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Degree of the fitted polynomial.
    pub degree: usize,
    /// The fitted polynomial.
    pub polynomial: &'a Chebyshev,
    /// Largest absolute error on the check grid.
    pub max_error: f64,
}

/// Indicates how [`approximate`] terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The error on the check grid fell within tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of [`approximate`].
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: Status,
    /// The last fitted polynomial.
    pub polynomial: Chebyshev,
    /// Largest absolute error of `polynomial` on the check grid.
    pub max_error: f64,
    /// Number of fits performed.
    pub iters: usize,
}

/// Fits a polynomial of the given degree by Chebyshev regression.
///
/// The function is sampled at `degree + 1 + extra_nodes` Chebyshev nodes on
/// `domain`. With no extra nodes the fit interpolates the samples.
///
/// # Errors
///
/// Returns an error if `domain` is invalid, if a sampled value is not finite,
/// or if the model or problem fails.
pub fn fit<M, P>(
    model: &M,
    problem: &P,
    domain: [f64; 2],
    degree: usize,
    extra_nodes: usize,
) -> Result<Chebyshev, Error>
where
    M: Model,
    P: ApproximationProblem<Input = M::Input, Output = M::Output>,
{
    check_domain(domain)?;

    let values = Chebyshev::nodes(degree + 1 + extra_nodes, domain)
        .into_iter()
        .map(|x| sample(model, problem, x))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Chebyshev::regress(domain, degree, &values))
}

/// Raises the polynomial degree until the fit is within tolerance.
///
/// Iteration `k` fits degree `k` using `k + 1 + extra_nodes` nodes and emits
/// an [`Event`] with its error on the check grid.
///
/// # Errors
///
/// Returns an error if `domain` is invalid, if a sampled value is not finite,
/// or if the model or problem fails.
pub fn approximate<M, P, Obs>(
    model: &M,
    problem: &P,
    domain: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: ApproximationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    check_domain(domain)?;

    let grid = check_grid(domain, config.check_points());
    let targets = grid
        .iter()
        .map(|&x| sample(model, problem, x))
        .collect::<Result<Vec<_>, _>>()?;

    let mut iters = 0;
    loop {
        let degree = iters;
        let polynomial = fit(model, problem, domain, degree, config.extra_nodes())?;
        let max_error = grid
            .iter()
            .zip(&targets)
            .map(|(&x, y)| (polynomial.eval(x) - y).abs())
            .fold(0.0, f64::max);
        iters += 1;

        let event = Event {
            degree,
            polynomial: &polynomial,
            max_error,
        };
        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if max_error <= config.tolerance() {
            Some(Status::Converged)
        } else if iters == config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                polynomial,
                max_error,
                iters,
            });
        }
    }
}

/// Runs [`approximate`] without observation.
///
/// # Errors
///
/// See [`approximate`].
pub fn approximate_unobserved<M, P>(
    model: &M,
    problem: &P,
    domain: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: ApproximationProblem<Input = M::Input, Output = M::Output>,
{
    approximate(model, problem, domain, config, ())
}

fn sample<M, P>(model: &M, problem: &P, x: f64) -> Result<f64, Error>
where
    M: Model,
    P: ApproximationProblem<Input = M::Input, Output = M::Output>,
{
    let value = evaluate(model, problem, x)?.value;
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }
    Ok(value)
}

/// `points` evenly spaced values covering `[a, b]`, ends included.
fn check_grid(domain: [f64; 2], points: usize) -> Vec<f64> {
    let [a, b] = domain;
    let step = (b - a) / (points - 1) as f64;
    (0..points)
        .map(|i| if i + 1 == points { b } else { a + step * i as f64 })
        .collect()
}
