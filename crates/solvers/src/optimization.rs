//! Solvers for optimization problems.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective.
//!
//! # Solvers
//!
//! - [`bracketing`]: derivative-free search that refines a triple of points
//!   known to enclose a local optimum
//!
//! [`OptimizationProblem`]: nmecon_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod bracketing;
