//! Solvers for function approximation problems.
//!
//! An [`ApproximationProblem`] maps a point of a scalar domain to model input
//! and extracts the value being approximated. Solvers in this module sample
//! that value at chosen nodes and fit an approximating function to it.
//!
//! # Solvers
//!
//! - [`chebyshev`]: Chebyshev polynomial regression with degree selection
//!
//! [`ApproximationProblem`]: nmecon_core::ApproximationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod chebyshev;
