use thiserror::Error;

use crate::{Initial, MethodKind};

/// Reasons a run is rejected before it produces a trace.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be positive")]
    MaxIters,

    #[error("{kind} cannot start from {initial:?}")]
    InitialState { kind: MethodKind, initial: Initial },

    #[error("initial guess is not finite: {0}")]
    NonFiniteGuess(f64),

    #[error("interval must have finite, distinct endpoints: {0:?}")]
    Interval([f64; 2]),

    #[error("function is not finite at an endpoint of {0:?}")]
    NonFiniteEndpoint([f64; 2]),

    #[error("function has no sign change over {0:?}")]
    NoSignChange([f64; 2]),

    #[error("function is not finite at x = {0}")]
    NonFiniteValue(f64),

    #[error("triple must have finite, strictly increasing points: {0:?}")]
    Triple([f64; 3]),

    #[error("middle point of {0:?} is not below both ends")]
    NoInteriorMinimum([f64; 3]),
}
