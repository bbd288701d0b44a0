use std::error::Error as StdError;

use crate::approximation::EvalError;

use super::DomainError;

/// Errors that can occur during Chebyshev approximation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    #[error("function value is not finite at x = {x}: {value}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
