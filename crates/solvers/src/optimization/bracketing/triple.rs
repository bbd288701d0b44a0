use thiserror::Error;

use super::{Config, Point};

/// Errors that can occur when validating a bracketing triple.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TripleError {
    #[error("triple points must be finite: {points:?}")]
    NonFinite { points: [f64; 3] },

    #[error("triple points must be strictly increasing: {points:?}")]
    NotIncreasing { points: [f64; 3] },

    #[error("middle point does not improve on both ends: {objectives:?}")]
    NotBracketing { objectives: [f64; 3] },
}

/// Checks that `points` are finite and strictly increasing.
pub(super) fn check_order(points: [f64; 3]) -> Result<(), TripleError> {
    if points.iter().any(|x| !x.is_finite()) {
        return Err(TripleError::NonFinite { points });
    }

    let [a, b, c] = points;
    if !(a < b && b < c) {
        return Err(TripleError::NotIncreasing { points });
    }

    Ok(())
}

/// Three points `a < b < c` with the lowest score at `b`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Triple {
    a: Point,
    b: Point,
    c: Point,
}

impl Triple {
    /// Creates a triple after checking that `b` scores strictly below both ends.
    pub(super) fn new<F: Fn(f64) -> f64>(
        a: Point,
        b: Point,
        c: Point,
        transform: &F,
    ) -> Result<Self, TripleError> {
        let score = |p: Point| transform(p.objective);

        if !(score(b).is_finite() && score(b) < score(a) && score(b) < score(c)) {
            return Err(TripleError::NotBracketing {
                objectives: [a.objective, b.objective, c.objective],
            });
        }

        Ok(Self { a, b, c })
    }

    pub(super) fn middle(&self) -> Point {
        self.b
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.a.x, self.c.x]
    }

    /// Midpoint of the larger sub-interval, where the next evaluation goes.
    pub(super) fn probe(&self) -> f64 {
        if self.b.x - self.a.x < self.c.x - self.b.x {
            0.5 * (self.b.x + self.c.x)
        } else {
            0.5 * (self.a.x + self.b.x)
        }
    }

    /// Replaces the triple with the sub-triple that keeps the lowest score
    /// in the middle.
    pub(super) fn insert<F: Fn(f64) -> f64>(&mut self, d: Point, transform: &F) {
        let d_is_worse = transform(d.objective) > transform(self.b.objective);
        let (a, b, c) = (self.a, self.b, self.c);

        (self.a, self.b, self.c) = match (d.x < b.x, d_is_worse) {
            (true, true) => (d, b, c),
            (true, false) => (a, d, b),
            (false, true) => (a, b, d),
            (false, false) => (b, d, c),
        };
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.c.x - self.a.x <= config.x_abs_tol() + config.x_rel_tol() * self.b.x.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn identity(v: f64) -> f64 {
        v
    }

    fn parabola(x: f64) -> Point {
        Point::new(x, (x - 1.0).powi(2))
    }

    #[test]
    fn rejects_bad_orderings() {
        assert!(matches!(
            check_order([0.0, f64::NAN, 1.0]),
            Err(TripleError::NonFinite { .. })
        ));
        assert!(matches!(
            check_order([0.0, 2.0, 1.0]),
            Err(TripleError::NotIncreasing { .. })
        ));
        assert!(matches!(
            check_order([0.0, 0.0, 1.0]),
            Err(TripleError::NotIncreasing { .. })
        ));
        assert!(check_order([0.0, 0.5, 1.0]).is_ok());
    }

    #[test]
    fn requires_middle_below_both_ends() {
        let result = Triple::new(parabola(1.5), parabola(2.0), parabola(3.0), &identity);
        assert!(matches!(result, Err(TripleError::NotBracketing { .. })));

        let result = Triple::new(parabola(0.0), parabola(0.5), parabola(3.0), &identity);
        assert!(result.is_ok());
    }

    #[test]
    fn probes_larger_side() {
        let triple = Triple::new(parabola(0.0), parabola(0.5), parabola(3.0), &identity).unwrap();
        assert_relative_eq!(triple.probe(), 1.75);

        let triple = Triple::new(parabola(-3.0), parabola(0.5), parabola(2.0), &identity).unwrap();
        assert_relative_eq!(triple.probe(), -1.25);
    }

    #[test]
    fn better_probe_becomes_middle() {
        let mut triple =
            Triple::new(parabola(0.0), parabola(0.5), parabola(3.0), &identity).unwrap();

        // f(1.75) = 0.5625 > f(0.5) = 0.25, so 1.75 becomes the right end.
        triple.insert(parabola(1.75), &identity);
        assert_eq!(triple.bounds(), [0.0, 1.75]);
        assert_relative_eq!(triple.middle().x, 0.5);

        // f(1.125) = 0.015625 < f(0.5), so 0.5 becomes the left end.
        triple.insert(parabola(1.125), &identity);
        assert_eq!(triple.bounds(), [0.5, 1.75]);
        assert_relative_eq!(triple.middle().x, 1.125);
    }
}
