use std::convert::Infallible;

use approx::assert_relative_eq;

use nmecon_core::{ApproximationProblem, Model};

use super::{
    Action, Config, DomainError, Error, Event, Status, approximate, approximate_unobserved, fit,
};

struct Scalar<F>(F);

impl<F: Fn(f64) -> f64> Model for Scalar<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// Approximates the model output directly.
struct Output;

impl ApproximationProblem for Output {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn value(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn approximates_exponential() {
    let model = Scalar(f64::exp);
    let config = Config::new(20, 1e-10, 0, 101).unwrap();

    let solution = approximate_unobserved(&model, &Output, [0.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.max_error <= 1e-10);
    assert_eq!(solution.polynomial.degree(), solution.iters - 1);
    assert_relative_eq!(solution.polynomial.eval(0.37), 0.37_f64.exp(), epsilon = 1e-9);
}

#[test]
fn stops_at_exact_degree() {
    let model = Scalar(|x: f64| x.powi(3) - x);
    let config = Config::new(10, 1e-12, 0, 21).unwrap();

    let solution = approximate_unobserved(&model, &Output, [-2.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.polynomial.degree(), 3);
}

#[test]
fn handles_runge_function() {
    let model = Scalar(|x: f64| 1.0 / (1.0 + 25.0 * x * x));
    let config = Config::new(60, 1e-3, 0, 201).unwrap();

    let solution = approximate_unobserved(&model, &Output, [-1.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters > 10);
}

#[test]
fn hits_iteration_limit() {
    let model = Scalar(f64::abs);
    let config = Config::new(5, 1e-12, 2, 51).unwrap();

    let solution = approximate_unobserved(&model, &Output, [-1.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.polynomial.degree(), 4);
    assert!(solution.max_error > 1e-12);
}

#[test]
fn observer_sees_each_degree() {
    let model = Scalar(f64::sin);
    let config = Config::new(6, 0.0, 0, 11).unwrap();

    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.degree, event.polynomial.degree(), event.max_error));
        None
    };

    let solution = approximate(&model, &Output, [0.0, 3.0], &config, observer).unwrap();

    assert_eq!(solution.iters, 6);
    let degrees: Vec<_> = seen.iter().map(|(d, p, _)| (*d, *p)).collect();
    assert_eq!(degrees, (0..6).map(|d| (d, d)).collect::<Vec<_>>());
    assert!(seen[5].2 < seen[0].2);
}

#[test]
fn observer_can_stop_early() {
    let model = Scalar(f64::exp);

    let observer = |event: &Event<'_>| (event.degree == 2).then_some(Action::StopEarly);

    let solution = approximate(&model, &Output, [0.0, 1.0], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn regression_with_extra_nodes_is_exact_for_low_degree() {
    let model = Scalar(|x: f64| 1.0 + 2.0 * x * x);

    let p = fit(&model, &Output, [0.0, 3.0], 2, 5).unwrap();

    assert_eq!(p.degree(), 2);
    assert_relative_eq!(p.eval(1.5), 5.5, epsilon = 1e-12);
    assert_relative_eq!(p.derivative().eval(1.5), 6.0, epsilon = 1e-12);
}

#[test]
fn errors_on_non_finite_value() {
    let model = Scalar(f64::ln);

    let result = approximate_unobserved(&model, &Output, [0.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteValue { x, .. }) if x == 0.0));
}

#[test]
fn rejects_invalid_domain() {
    let model = Scalar(f64::exp);

    let result = fit(&model, &Output, [1.0, 0.0], 3, 0);

    assert!(matches!(
        result,
        Err(Error::InvalidDomain(DomainError::Empty { .. }))
    ));
}
