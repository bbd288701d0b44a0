use thiserror::Error;

/// Configuration for [`approximate`](super::approximate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    extra_nodes: usize,
    check_points: usize,
}

/// Errors that can occur when validating an approximation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("check_points must be at least 2")]
    CheckPoints,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-8, 0, 101).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_iters` bounds the number of fits, so the highest degree tried is
    /// `max_iters - 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero, if `tolerance` is negative or
    /// non-finite, or if `check_points` is less than 2.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        extra_nodes: usize,
        check_points: usize,
    ) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if check_points < 2 {
            return Err(ConfigError::CheckPoints);
        }

        Ok(Self {
            max_iters,
            tolerance,
            extra_nodes,
            check_points,
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the largest absolute error.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the number of nodes used beyond `degree + 1`.
    #[must_use]
    pub fn extra_nodes(&self) -> usize {
        self.extra_nodes
    }

    /// Returns the size of the evenly spaced check grid.
    #[must_use]
    pub fn check_points(&self) -> usize {
        self.check_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_fields() {
        assert_eq!(Config::new(0, 1e-6, 0, 10), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(5, -1.0, 0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(5, 1e-6, 0, 1), Err(ConfigError::CheckPoints));
        assert!(Config::new(5, 0.0, 3, 2).is_ok());
    }
}
