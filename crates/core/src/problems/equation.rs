/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers drive the residuals
/// toward zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// For example, `N = 1` represents a scalar root-finding problem.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;

    /// Returns the Jacobian of the residuals with respect to `x`, if known.
    ///
    /// Row `i` holds the partial derivatives of residual `i`. Derivative-based
    /// solvers fall back to finite differences when this returns `None`, which
    /// is the default.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(
        &self,
        _x: &[f64; N],
        _input: &Self::Input,
        _output: &Self::Output,
    ) -> Option<Result<[[f64; N]; N], Self::Error>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Market clearing: excess demand `a - b p - s p` must vanish.
    struct ExcessDemand {
        intercept: f64,
        demand_slope: f64,
        supply_slope: f64,
    }

    impl EquationProblem<1> for ExcessDemand {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn residuals(&self, price: &f64, _output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([self.intercept - (self.demand_slope + self.supply_slope) * price])
        }
    }

    #[test]
    fn jacobian_defaults_to_none() {
        let problem = ExcessDemand {
            intercept: 10.0,
            demand_slope: 1.0,
            supply_slope: 1.0,
        };

        assert!(problem.jacobian(&[1.0], &1.0, &0.0).is_none());
        assert_eq!(problem.residuals(&5.0, &0.0).unwrap(), [0.0]);
    }
}
