#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nmecon_observers::History;
use nmecon_solvers::{
    approximation::chebyshev,
    equation::{bisection, fixed_point, newton},
    optimization::bracketing,
};

use crate::{
    ConvergenceTrace, Estimate, Initial, InvalidInput, MethodConfig, MethodKind, Target,
    adapt::{Gap, Minimum, Root, Sample, TargetModel},
};

/// Message for solver errors that only a failing model or problem can raise.
const INFALLIBLE: &str = "target evaluation is infallible";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Status {
    /// The convergence signal fell within tolerance.
    Converged,
    /// The iteration budget ran out first.
    MaxIterationsReached,
    /// The method produced a non-finite value or could not take a step.
    Diverged,
}

/// The outcome of [`run`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
    pub estimate: Estimate,
    pub trace: ConvergenceTrace,
    pub status: Status,
}

/// Applies the configured method to `function` starting from `initial`.
///
/// Bisection and polynomial approximation start from
/// [`Initial::Interval`], given in either order. Newton and fixed-point
/// iteration start from [`Initial::Guess`]. Bracketing search starts from
/// [`Initial::Triple`] and looks for a local minimum. For fixed-point
/// iteration `function` is the map `g` in `x = g(x)`.
///
/// The trace holds one step per iteration, so its length is the number of
/// iterations taken, never more than `config.max_iters`. Evaluating a bracket
/// endpoint, an initial guess, or the starting triple is not an iteration.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the config fails validation, if `initial` does
/// not suit the method, or if the starting state is unusable: interval
/// endpoints not finite or equal, no sign change for bisection, a triple
/// that is not increasing or has no interior minimum, or a non-finite
/// function value where the method starts.
pub fn run<F>(function: &F, initial: Initial, config: &MethodConfig) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    config.validate()?;

    match (config.kind, initial) {
        (MethodKind::Bisection, Initial::Interval(interval)) => {
            run_bisection(function, interval, config)
        }
        (MethodKind::Newton, Initial::Guess(x0)) => run_newton(function, x0, config),
        (MethodKind::FixedPoint, Initial::Guess(x0)) => run_fixed_point(function, x0, config),
        (MethodKind::PolynomialApproximation, Initial::Interval(interval)) => {
            run_approximation(function, interval, config)
        }
        (MethodKind::Bracketing, Initial::Triple(triple)) => {
            run_bracketing(function, triple, config)
        }
        (kind, initial) => Err(InvalidInput::InitialState { kind, initial }),
    }
}

fn run_bisection<F>(
    function: &F,
    interval: [f64; 2],
    config: &MethodConfig,
) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    let solver_config =
        bisection::Config::new(config.max_iters, config.tolerance, 0.0, config.tolerance)
            .map_err(|_| InvalidInput::Tolerance(config.tolerance))?;

    let mut history = History::<f64>::new();
    let result = bisection::solve(
        &TargetModel(function),
        &Root(function),
        interval,
        &solver_config,
        &mut history,
    );
    let trace = ConvergenceTrace::from_records(history.into_records());

    match result {
        Ok(solution) => Ok(Run {
            estimate: Estimate::Point(solution.x),
            trace,
            status: match solution.status {
                bisection::Status::Converged => Status::Converged,
                bisection::Status::MaxIters | bisection::Status::StoppedByObserver => {
                    Status::MaxIterationsReached
                }
            },
        }),
        Err(bisection::Error::NonFiniteResidual { x, .. }) => Ok(Run {
            estimate: Estimate::Point(x),
            trace,
            status: Status::Diverged,
        }),
        Err(bisection::Error::InvalidBracket(error)) => Err(match error {
            bisection::BracketError::NonFinite | bisection::BracketError::ZeroWidth => {
                InvalidInput::Interval(interval)
            }
            bisection::BracketError::NonFiniteResidual => InvalidInput::NonFiniteEndpoint(interval),
            bisection::BracketError::NoSignChange => InvalidInput::NoSignChange(interval),
        }),
        // History never stops the search, so a best point always exists.
        Err(
            bisection::Error::NoSuccessfulEvaluation
            | bisection::Error::Model(_)
            | bisection::Error::Problem(_),
        ) => unreachable!("{INFALLIBLE}"),
    }
}

fn run_newton<F>(function: &F, x0: f64, config: &MethodConfig) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    let defaults = newton::Config::default();
    let solver_config = newton::Config::new(
        config.max_iters,
        config.tolerance,
        config.tolerance,
        defaults.min_derivative(),
        defaults.fd_step(),
    )
    .map_err(|_| InvalidInput::Tolerance(config.tolerance))?;

    let mut history = History::<f64>::new();
    let solution = match newton::solve(
        &TargetModel(function),
        &Root(function),
        x0,
        &solver_config,
        &mut history,
    ) {
        Ok(solution) => solution,
        Err(newton::Error::NonFiniteGuess { x }) => return Err(InvalidInput::NonFiniteGuess(x)),
        Err(newton::Error::Model(_) | newton::Error::Problem(_)) => unreachable!("{INFALLIBLE}"),
    };

    Ok(Run {
        estimate: Estimate::Point(solution.x),
        trace: ConvergenceTrace::from_records(history.into_records()),
        status: match solution.status {
            newton::Status::Converged => Status::Converged,
            newton::Status::MaxIters | newton::Status::StoppedByObserver => {
                Status::MaxIterationsReached
            }
            newton::Status::ZeroDerivative | newton::Status::NonFinite => Status::Diverged,
        },
    })
}

fn run_fixed_point<F>(function: &F, x0: f64, config: &MethodConfig) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    let solver_config =
        fixed_point::Config::new(config.max_iters, config.tolerance, config.tolerance, 1.0)
            .map_err(|_| InvalidInput::Tolerance(config.tolerance))?;

    let mut history = History::<f64>::new();
    let solution = match fixed_point::solve(
        &TargetModel(function),
        &Gap,
        x0,
        &solver_config,
        &mut history,
    ) {
        Ok(solution) => solution,
        Err(fixed_point::Error::NonFiniteGuess { x }) => {
            return Err(InvalidInput::NonFiniteGuess(x));
        }
        Err(fixed_point::Error::Model(_) | fixed_point::Error::Problem(_)) => {
            unreachable!("{INFALLIBLE}")
        }
    };

    Ok(Run {
        estimate: Estimate::Point(solution.x),
        trace: ConvergenceTrace::from_records(history.into_records()),
        status: match solution.status {
            fixed_point::Status::Converged => Status::Converged,
            fixed_point::Status::MaxIters | fixed_point::Status::StoppedByObserver => {
                Status::MaxIterationsReached
            }
            fixed_point::Status::Diverged => Status::Diverged,
        },
    })
}

fn run_approximation<F>(
    function: &F,
    interval: [f64; 2],
    config: &MethodConfig,
) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    let defaults = chebyshev::Config::default();
    let solver_config = chebyshev::Config::new(
        config.max_iters,
        config.tolerance,
        defaults.extra_nodes(),
        defaults.check_points(),
    )
    .map_err(|_| InvalidInput::Tolerance(config.tolerance))?;

    let [a, b] = interval;
    let domain = if a > b { [b, a] } else { interval };

    let mut history = History::<chebyshev::Chebyshev>::new();
    let result = chebyshev::approximate(
        &TargetModel(function),
        &Sample,
        domain,
        &solver_config,
        &mut history,
    );

    match result {
        Ok(solution) => Ok(Run {
            estimate: Estimate::Polynomial(solution.polynomial),
            trace: ConvergenceTrace::from_records(history.into_records()),
            status: match solution.status {
                chebyshev::Status::Converged => Status::Converged,
                chebyshev::Status::MaxIters | chebyshev::Status::StoppedByObserver => {
                    Status::MaxIterationsReached
                }
            },
        }),
        // A node for a higher degree hit a non-finite value after earlier fits
        // succeeded; report the last good fit.
        Err(chebyshev::Error::NonFiniteValue { x, .. }) => {
            let trace = ConvergenceTrace::from_records(history.into_records());
            match trace.last() {
                Some(step) => Ok(Run {
                    estimate: step.estimate.clone(),
                    trace,
                    status: Status::Diverged,
                }),
                None => Err(InvalidInput::NonFiniteValue(x)),
            }
        }
        Err(chebyshev::Error::InvalidDomain(_)) => Err(InvalidInput::Interval(interval)),
        Err(chebyshev::Error::Model(_) | chebyshev::Error::Problem(_)) => {
            unreachable!("{INFALLIBLE}")
        }
    }
}

fn run_bracketing<F>(
    function: &F,
    triple: [f64; 3],
    config: &MethodConfig,
) -> Result<Run, InvalidInput>
where
    F: Target + ?Sized,
{
    let solver_config = bracketing::Config::new(config.max_iters, config.tolerance, 0.0)
        .map_err(|_| InvalidInput::Tolerance(config.tolerance))?;

    let mut history = History::<f64>::new();
    let result = bracketing::minimize(
        &TargetModel(function),
        &Minimum,
        triple,
        &solver_config,
        &mut history,
    );
    let trace = ConvergenceTrace::from_records(history.into_records());

    match result {
        Ok(solution) => Ok(Run {
            estimate: Estimate::Point(solution.x),
            trace,
            status: match solution.status {
                bracketing::Status::Converged => Status::Converged,
                bracketing::Status::MaxIters | bracketing::Status::StoppedByObserver => {
                    Status::MaxIterationsReached
                }
            },
        }),
        Err(bracketing::Error::NanObjective { x }) if triple.contains(&x) => {
            Err(InvalidInput::NonFiniteValue(x))
        }
        Err(bracketing::Error::NanObjective { .. }) => {
            let estimate = trace
                .last()
                .map_or(Estimate::Point(triple[1]), |step| step.estimate.clone());
            Ok(Run {
                estimate,
                trace,
                status: Status::Diverged,
            })
        }
        Err(bracketing::Error::InvalidTriple(error)) => Err(match error {
            bracketing::TripleError::NonFinite { .. }
            | bracketing::TripleError::NotIncreasing { .. } => InvalidInput::Triple(triple),
            bracketing::TripleError::NotBracketing { .. } => {
                InvalidInput::NoInteriorMinimum(triple)
            }
        }),
        Err(bracketing::Error::Model(_) | bracketing::Error::Problem(_)) => {
            unreachable!("{INFALLIBLE}")
        }
    }
}
