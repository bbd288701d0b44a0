use crate::equation::Evaluation;

/// Event emitted by the Newton solver.
pub enum Event<'a, I, O> {
    /// Evaluation of the initial guess.
    Initial { eval: &'a Evaluation<I, O, 1> },

    /// A completed Newton step.
    Step {
        /// Iteration counter, starting at 1.
        iter: usize,
        /// Residual derivative at the previous iterate.
        derivative: f64,
        /// Signed step taken from the previous iterate.
        step: f64,
        /// Evaluation at the new iterate.
        eval: &'a Evaluation<I, O, 1>,
    },
}

impl<'a, I, O> Event<'a, I, O> {
    /// Returns the evaluation carried by this event.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        match self {
            Event::Initial { eval } | Event::Step { eval, .. } => *eval,
        }
    }

    /// Returns the iteration counter for step events.
    #[must_use]
    pub fn iter(&self) -> Option<usize> {
        match self {
            Event::Initial { .. } => None,
            Event::Step { iter, .. } => Some(*iter),
        }
    }
}
