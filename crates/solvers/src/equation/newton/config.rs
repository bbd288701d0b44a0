use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
    min_derivative: f64,
    fd_step: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("min_derivative must be finite and non-negative")]
    MinDerivative,

    #[error("fd_step must be finite and positive")]
    FdStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-5, 0.0, 1e-14, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if the
    /// finite-difference step is not positive.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        residual_tol: f64,
        min_derivative: f64,
        fd_step: f64,
    ) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        if !min_derivative.is_finite() || min_derivative < 0.0 {
            return Err(ConfigError::MinDerivative);
        }
        if !fd_step.is_finite() || fd_step <= 0.0 {
            return Err(ConfigError::FdStep);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
            min_derivative,
            fd_step,
        })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the step size.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the tolerance on the residual magnitude.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the smallest derivative magnitude the solver will divide by.
    #[must_use]
    pub fn min_derivative(&self) -> f64 {
        self.min_derivative
    }

    /// Returns the relative finite-difference step.
    #[must_use]
    pub fn fd_step(&self) -> f64 {
        self.fd_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 20);
        assert!(config.fd_step() > 0.0);
    }

    #[test]
    fn rejects_zero_fd_step() {
        assert_eq!(
            Config::new(10, 1e-8, 1e-8, 1e-14, 0.0),
            Err(ConfigError::FdStep)
        );
    }

    #[test]
    fn rejects_negative_min_derivative() {
        assert_eq!(
            Config::new(10, 1e-8, 1e-8, -1.0, 1e-6),
            Err(ConfigError::MinDerivative)
        );
    }
}
