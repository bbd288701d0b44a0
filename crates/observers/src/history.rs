use nmecon_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub estimate: T,
    pub residual: f64,
}

/// An observer that records the estimate and residual of every iteration.
///
/// Setup events (those whose [`HasEstimate::estimate`] is `None`) are skipped,
/// so the records line up one-to-one with solver iterations. `History` never
/// acts on the solver.
///
/// Pass `&mut history` to a solver to read the records after it returns:
///
/// ```rust
/// use nmecon_observers::History;
/// use nmecon_solvers::equation::newton;
/// # use std::convert::Infallible;
/// # use nmecon_core::{EquationProblem, Model};
/// # struct Square;
/// # impl Model for Square {
/// #     type Input = f64;
/// #     type Output = f64;
/// #     type Error = Infallible;
/// #     fn call(&self, x: &f64) -> Result<f64, Infallible> { Ok(x * x - 2.0) }
/// # }
/// # struct Root;
/// # impl EquationProblem<1> for Root {
/// #     type Input = f64;
/// #     type Output = f64;
/// #     type Error = Infallible;
/// #     fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> { Ok(x[0]) }
/// #     fn residuals(&self, _: &f64, y: &f64) -> Result<[f64; 1], Infallible> { Ok([*y]) }
/// # }
///
/// let mut history = History::<f64>::new();
/// let solution = newton::solve(&Square, &Root, 1.0, &newton::Config::default(), &mut history)?;
///
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), newton::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct History<T> {
    records: Vec<Record<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record<T>> {
        self.records
    }
}

impl<T, E, A> Observer<E, A> for History<T>
where
    E: HasEstimate<Estimate = T> + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(estimate) = event.estimate() {
            self.records.push(Record {
                estimate,
                residual: event.residual(),
            });
        }
        None
    }
}

impl<T, E, A> Observer<E, A> for &mut History<T>
where
    E: HasEstimate<Estimate = T> + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
