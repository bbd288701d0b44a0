//! Adapters that present a [`Target`] to the solvers.

use std::convert::Infallible;

use nmecon_core::{ApproximationProblem, EquationProblem, Model, OptimizationProblem};

use crate::Target;

/// Calls the target as a model.
pub(crate) struct TargetModel<'f, F: ?Sized>(pub(crate) &'f F);

impl<F: Target + ?Sized> Model for TargetModel<'_, F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self.0.value(*x))
    }
}

/// Root of the target: the residual is `f(x)`.
pub(crate) struct Root<'f, F: ?Sized>(pub(crate) &'f F);

impl<F: Target + ?Sized> EquationProblem<1> for Root<'_, F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }

    fn jacobian(
        &self,
        x: &[f64; 1],
        _input: &f64,
        _output: &f64,
    ) -> Option<Result<[[f64; 1]; 1], Self::Error>> {
        self.0.derivative(x[0]).map(|d| Ok([[d]]))
    }
}

/// Fixed point of the target: the residual is `g(x) - x`.
pub(crate) struct Gap;

impl EquationProblem<1> for Gap {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - input])
    }
}

/// Minimum of the target: the objective is `f(x)`.
pub(crate) struct Minimum;

impl OptimizationProblem<1> for Minimum {
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

/// Approximates the target's values.
pub(crate) struct Sample;

impl ApproximationProblem for Sample {
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
