use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use nmecon_core::{Model, OptimizationProblem};

use super::{
    Action, Config, Error, Event, Status, TripleError, maximize, maximize_unobserved, minimize,
    minimize_unobserved,
};

/// Wraps a scalar function as a model.
struct Scalar<F>(F);

impl<F: Fn(f64) -> f64> Model for Scalar<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// Objective: the model output.
struct Output;

impl OptimizationProblem<1> for Output {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn tight() -> Config {
    Config::new(200, 1e-9, 0.0).unwrap()
}

#[test]
fn minimizes_to_the_right_of_the_middle_point() {
    let model = Scalar(|x: f64| (x - 2.0).powi(2));

    let solution = minimize_unobserved(&model, &Output, [0.0, 1.0, 5.0], &tight()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-8);
    assert!(solution.bounds[1] - solution.bounds[0] <= 1e-9);
    assert_relative_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn minimizes_to_the_left_of_the_middle_point() {
    // -x e^{-x} has its minimum at x = 1.
    let model = Scalar(|x: f64| -x * (-x).exp());

    let solution = minimize_unobserved(&model, &Output, [-1.0, 3.0, 4.0], &tight()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-7);
    assert_relative_eq!(solution.objective, -(-1.0_f64).exp(), epsilon = 1e-12);
}

#[test]
fn maximizes_utility() {
    // ln(x) - x/2 peaks at x = 2.
    let model = Scalar(|x: f64| x.ln() - 0.5 * x);

    let solution = maximize_unobserved(&model, &Output, [0.5, 1.0, 6.0], &tight()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-7);
}

#[test]
fn middle_point_never_worsens() {
    let model = Scalar(|x: f64| (x - 0.3).abs());

    let mut best = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        best.push(event.best().objective);
        None
    };

    let solution = minimize(&model, &Output, [-2.0, 0.0, 2.0], &tight(), observer).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-8);
    assert!(best.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn rejects_invalid_triples() {
    let model = Scalar(|x: f64| x * x);
    let config = Config::default();

    let unordered = minimize_unobserved(&model, &Output, [1.0, 0.0, 2.0], &config);
    assert!(matches!(
        unordered,
        Err(Error::InvalidTriple(TripleError::NotIncreasing { .. }))
    ));

    let not_bracketing = minimize_unobserved(&model, &Output, [1.0, 2.0, 3.0], &config);
    assert!(matches!(
        not_bracketing,
        Err(Error::InvalidTriple(TripleError::NotBracketing { .. }))
    ));

    let infinite = minimize_unobserved(&model, &Output, [f64::NEG_INFINITY, 0.0, 1.0], &config);
    assert!(matches!(
        infinite,
        Err(Error::InvalidTriple(TripleError::NonFinite { .. }))
    ));
}

#[test]
fn errors_on_nan_objective() {
    let model = Scalar(|x: f64| if x > 1.0 { f64::NAN } else { (x - 0.5).powi(2) });

    let result = minimize_unobserved(&model, &Output, [0.0, 0.5, 1.0], &tight());
    assert!(result.is_ok());

    let result = minimize_unobserved(&model, &Output, [0.0, 0.5, 2.0], &tight());
    assert!(matches!(result, Err(Error::NanObjective { x }) if x == 2.0));
}

#[test]
fn hits_iteration_limit() {
    let model = Scalar(|x: f64| x * x);
    let config = Config::new(5, 0.0, 0.0).unwrap();

    let solution = minimize_unobserved(&model, &Output, [-1.0, 0.25, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!(solution.bounds[0] < solution.x && solution.x < solution.bounds[1]);
}

#[test]
fn observer_can_stop_early() {
    let model = Scalar(|x: f64| x * x);

    let mut calls = 0;
    let observer = |_: &Event<'_, _, _>| {
        calls += 1;
        (calls == 4).then_some(Action::StopEarly)
    };

    let solution = minimize(&model, &Output, [-1.0, 0.25, 1.0], &tight(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 4);
}

#[derive(Debug, Error)]
#[error("model undefined at {0}")]
struct Undefined(f64);

/// `sqrt(x) - x/4`, which fails to evaluate on `(8, 9)`.
struct Holey;

impl Model for Holey {
    type Input = f64;
    type Output = f64;
    type Error = Undefined;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > 8.0 && *x < 9.0 {
            Err(Undefined(*x))
        } else {
            Ok(x.sqrt() - 0.25 * x)
        }
    }
}

#[test]
fn model_failure_propagates() {
    // The first probe lands at 8.5.
    let result = maximize_unobserved(&Holey, &Output, [0.0, 1.0, 16.0], &tight());
    assert!(result.is_err_and(|e| matches!(e, Error::Model(_))));
}

#[test]
fn assume_worse_recovers_from_model_failure() {
    let observer = |event: &Event<'_, _, _>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::AssumeWorse)
    };

    let solution = maximize(&Holey, &Output, [0.0, 1.0, 16.0], &tight(), observer).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.0, epsilon = 1e-7);
}

#[test]
fn nan_probe_ends_search_without_an_event() {
    let model = Scalar(|x: f64| {
        if x > 8.0 && x < 9.0 {
            f64::NAN
        } else {
            x.sqrt() - 0.25 * x
        }
    });

    let mut events = 0;
    let observer = |_: &Event<'_, _, _>| {
        events += 1;
        Some(Action::AssumeWorse)
    };

    // The first probe lands at 8.5.
    let result = maximize(&model, &Output, [0.0, 1.0, 16.0], &tight(), observer);

    assert!(matches!(result, Err(Error::NanObjective { x }) if x == 8.5));
    assert_eq!(events, 0);
}

#[test]
fn events_carry_the_shrinking_bounds() {
    let model = Scalar(|x: f64| (x - 2.0).powi(2));

    let mut widths = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        let [a, c] = event.bounds();
        assert!(a < event.best().x && event.best().x < c);
        widths.push(c - a);
        None::<Action>
    };

    let solution = minimize(&model, &Output, [0.0, 1.0, 5.0], &tight(), observer).unwrap();

    assert_eq!(widths.len(), solution.iters);
    assert_relative_eq!(widths[0], 5.0);
    assert!(widths.windows(2).all(|w| w[1] <= w[0]));
}
