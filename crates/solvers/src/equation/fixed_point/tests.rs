use std::convert::Infallible;

use approx::assert_relative_eq;

use nmecon_core::{EquationProblem, Model};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

/// Model computing `g(x)`.
struct Map<F>(F);

impl<F: Fn(f64) -> f64> Model for Map<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// Residual `g(x) - x`.
struct FixedPoint;

impl EquationProblem<1> for FixedPoint {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, x: &f64, g: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([g - x])
    }
}

/// The Dottie number, the fixed point of cos.
const DOTTIE: f64 = 0.739_085_133_215_160_6;

#[test]
fn finds_fixed_point_of_cosine() {
    let model = Map(f64::cos);
    let config = Config::new(200, 0.0, 1e-12, 1.0).unwrap();

    let solution = solve_unobserved(&model, &FixedPoint, 1.0, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, DOTTIE, epsilon = 1e-11);
}

#[test]
fn damping_tames_oscillation() {
    // g(x) = 3 - 1.5x overshoots: |g'| > 1, so plain iteration diverges.
    let model = Map(|x: f64| 3.0 - 1.5 * x);

    let plain = Config::new(50, 0.0, 1e-10, 1.0).unwrap();
    let solution = solve_unobserved(&model, &FixedPoint, 0.0, &plain).unwrap();
    assert_eq!(solution.status, Status::MaxIters);

    let damped = Config::new(50, 0.0, 1e-10, 0.4).unwrap();
    let solution = solve_unobserved(&model, &FixedPoint, 0.0, &damped).unwrap();
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.2, epsilon = 1e-9);
}

#[test]
fn reports_divergence() {
    let model = Map(f64::exp);

    let solution = solve_unobserved(&model, &FixedPoint, 1.0, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Diverged);
    assert!(solution.x.is_finite());
    assert!(solution.iters < 10);
}

#[test]
fn observer_sees_each_step() {
    let model = Map(f64::cos);
    let config = Config::new(5, 0.0, 0.0, 1.0).unwrap();

    let mut iters = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        iters.extend(event.iter());
        None
    };

    let solution = solve(&model, &FixedPoint, 1.0, &config, observer).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(iters, vec![1, 2, 3, 4, 5]);
}

#[test]
fn observer_can_stop_iteration() {
    let model = Map(f64::cos);

    let observer =
        |event: &Event<'_, f64, f64>| (event.iter() == Some(3)).then_some(Action::StopEarly);

    let solution = solve(&model, &FixedPoint, 1.0, &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn rejects_non_finite_guess() {
    let result = solve_unobserved(&Map(f64::cos), &FixedPoint, f64::INFINITY, &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
}
