use thiserror::Error;

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
    damping: f64,
}

/// Errors that can occur when validating a fixed-point solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("damping must lie in (0, 1]")]
    Damping,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1_000, 1e-9, 1e-9, 1.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and damping.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if the
    /// damping factor lies outside `(0, 1]`.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        residual_tol: f64,
        damping: f64,
    ) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(ConfigError::Damping);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
            damping,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the step size.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the tolerance on `|g(x) - x|`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the damping factor.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_damping_outside_unit_interval() {
        assert_eq!(Config::new(10, 0.0, 0.0, 0.0), Err(ConfigError::Damping));
        assert_eq!(Config::new(10, 0.0, 0.0, 1.5), Err(ConfigError::Damping));
        assert_eq!(
            Config::new(10, 0.0, 0.0, f64::NAN),
            Err(ConfigError::Damping)
        );
        assert!(Config::new(10, 0.0, 0.0, 1.0).is_ok());
    }
}
