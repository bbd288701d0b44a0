use nmecon_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solver once the residual is small enough.
///
/// Counts every event it sees, including setup evaluations, and requests a
/// stop on the first event after `min_iters` whose `|residual|` is below
/// `tolerance`. Useful for accepting a looser answer than the solver's own
/// tolerances would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodEnough {
    tolerance: f64,
    min_iters: usize,
    seen: usize,
}

impl GoodEnough {
    #[must_use]
    pub fn new(tolerance: f64, min_iters: usize) -> Self {
        Self {
            tolerance,
            min_iters,
            seen: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.min_iters && event.residual().abs() < self.tolerance)
            .then(A::stop_early)
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for &mut GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use nmecon_core::{EquationProblem, Model};
    use nmecon_solvers::equation::bisection;

    struct Cubic;

    impl Model for Cubic {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x.powi(3) - 2.0)
        }
    }

    struct Residual;

    impl EquationProblem<1> for Residual {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([*output])
        }
    }

    #[test]
    fn stops_bisection_at_loose_tolerance() {
        let mut good_enough = GoodEnough::new(1e-2, 0);

        let solution = bisection::solve(
            &Cubic,
            &Residual,
            [0.0, 2.0],
            &bisection::Config::default(),
            &mut good_enough,
        )
        .unwrap();

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert!(solution.residual.abs() < 1e-2);
        assert_eq!(good_enough.seen(), solution.iters + 2);
    }

    #[test]
    fn waits_for_min_iters() {
        let mut good_enough = GoodEnough::new(1.0, 10);

        let solution = bisection::solve(
            &Cubic,
            &Residual,
            [0.0, 2.0],
            &bisection::Config::default(),
            &mut good_enough,
        )
        .unwrap();

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert_eq!(solution.iters, 8);
    }
}
