/// A real function of one real variable.
///
/// Closures and function pointers of type `Fn(f64) -> f64` implement
/// `Target` directly. Wrap a function in [`WithDerivative`] to give Newton's
/// method an analytic derivative instead of a finite-difference estimate.
pub trait Target {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates the derivative at `x`, if known.
    fn derivative(&self, _x: f64) -> Option<f64> {
        None
    }
}

impl<F> Target for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A function paired with its analytic derivative.
///
/// ```rust
/// use nmecon_runner::{Target, WithDerivative};
///
/// let f = WithDerivative(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(f.derivative(3.0), Some(6.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D>(pub F, pub D);

impl<F, D> Target for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        Some((self.1)(x))
    }
}
