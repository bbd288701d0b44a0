//! Numerical solvers for nmecon problems.
//!
//! Every solver follows the same shape: it takes a [`Model`], a problem that
//! adapts solver variables to model inputs, a starting point or interval, a
//! validated `Config`, and an [`Observer`] that sees one event per evaluation
//! and may steer or stop the iteration.
//!
//! - [`equation`]: root finding: [`equation::bisection`],
//!   [`equation::newton`], [`equation::fixed_point`]
//! - [`optimization`]: minimization: [`optimization::bracketing`]
//! - [`approximation`]: function approximation: [`approximation::chebyshev`]
//!
//! [`Model`]: nmecon_core::Model
//! [`Observer`]: nmecon_core::Observer

pub mod approximation;
pub mod equation;
pub mod optimization;
