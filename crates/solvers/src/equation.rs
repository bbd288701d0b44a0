//! Solvers for equation problems: finding roots of equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: quadratic convergence from a good initial guess
//! - [`fixed_point`]: damped successive approximation of `x = g(x)`
//!
//! [`EquationProblem`]: nmecon_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod bisection;
pub mod fixed_point;
pub mod newton;
