//! Run a numerical method on a function of one variable.
//!
//! [`run`] takes a [`Target`] function, an [`Initial`] guess, interval, or triple, and
//! a [`MethodConfig`], and returns a [`Run`]: the final [`Estimate`], the
//! [`ConvergenceTrace`] of every iteration, and a [`Status`].
//!
//! ```rust
//! use nmecon_runner::{Initial, MethodConfig, MethodKind, Status, run};
//!
//! let config = MethodConfig::new(MethodKind::Bisection, 1e-6, 100);
//! let result = run(&|x: f64| x * x - 2.0, Initial::Interval([0.0, 2.0]), &config)?;
//!
//! assert_eq!(result.status, Status::Converged);
//! assert!(result.trace.len() <= 21);
//! # Ok::<(), nmecon_runner::InvalidInput>(())
//! ```
//!
//! Each method is a solver from `nmecon-solvers`, and the trace is recorded
//! by a [`History`](nmecon_observers::History) observer. Use the solvers
//! directly for richer models, custom observers, or finer control over
//! tolerances.

mod adapt;
mod config;
mod error;
mod run;
mod target;
mod trace;

pub use config::{Initial, MethodConfig, MethodKind};
pub use error::InvalidInput;
pub use run::{Run, Status, run};
pub use target::{Target, WithDerivative};
pub use trace::{ConvergenceTrace, Estimate, Step};

pub use nmecon_solvers::approximation::chebyshev::Chebyshev;
