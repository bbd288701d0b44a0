//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can watch any solver that supports the capability.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual or error measure
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasEstimate`]: events that mark a completed iteration
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use nmecon_core::Observer;
//! use nmecon_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct Budget {
//!     evaluations: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.evaluations = self.evaluations.checked_sub(1)?;
//!         (self.evaluations == 0).then(A::stop_early)
//!     }
//! }
//! ```

use nmecon_core::{EquationProblem, Model, OptimizationProblem};

use nmecon_solvers::{
    approximation::chebyshev::{self, Chebyshev},
    equation::{bisection, fixed_point, newton},
    optimization::bracketing,
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An event that may mark the end of an iteration.
pub trait HasEstimate {
    /// The iterate type: a point for root finders, a polynomial for
    /// approximation.
    type Estimate;

    /// Returns the iterate produced by this event.
    ///
    /// Returns `None` for setup events, such as the evaluation of an initial
    /// guess or bracket endpoint, which are not iterations.
    fn estimate(&self) -> Option<Self::Estimate>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the best.
    fn assume_worse() -> Self;
}

// --- bisection ---

impl<M, P> HasResidual for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        match self.result() {
            Ok(eval) => eval.residual(),
            Err(_) => f64::NAN,
        }
    }
}

impl<M, P> HasEstimate for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    type Estimate = f64;

    fn estimate(&self) -> Option<f64> {
        self.iter().map(|_| self.x())
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval().residual()
    }
}

impl<I, O> HasEstimate for newton::Event<'_, I, O> {
    type Estimate = f64;

    fn estimate(&self) -> Option<f64> {
        self.iter().map(|_| self.eval().x[0])
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- fixed_point ---

impl<I, O> HasResidual for fixed_point::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval().residual()
    }
}

impl<I, O> HasEstimate for fixed_point::Event<'_, I, O> {
    type Estimate = f64;

    fn estimate(&self) -> Option<f64> {
        self.iter().map(|_| self.eval().x[0])
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- bracketing ---

impl<M, P> HasObjective for bracketing::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        match self {
            bracketing::Event::Evaluated { point, .. } => point.objective,
            bracketing::Event::ModelFailed { .. } | bracketing::Event::ProblemFailed { .. } => {
                f64::NAN
            }
        }
    }
}

/// The residual of a bracketing step is the width of its triple.
impl<M, P> HasResidual for bracketing::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        let [a, c] = self.bounds();
        c - a
    }
}

impl<M, P> HasEstimate for bracketing::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    type Estimate = f64;

    fn estimate(&self) -> Option<f64> {
        Some(self.best().x)
    }
}

impl CanStopEarly for bracketing::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for bracketing::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

// --- chebyshev ---

/// The residual of a fit is its largest error on the check grid.
impl HasResidual for chebyshev::Event<'_> {
    fn residual(&self) -> f64 {
        self.max_error
    }
}

impl HasEstimate for chebyshev::Event<'_> {
    type Estimate = Chebyshev;

    fn estimate(&self) -> Option<Chebyshev> {
        Some(self.polynomial.clone())
    }
}

impl CanStopEarly for chebyshev::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
