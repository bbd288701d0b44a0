use std::error::Error as StdError;

use crate::optimization::evaluate::EvalError;

use super::TripleError;

/// Errors that can occur during bracketing search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid triple: {0}")]
    InvalidTriple(#[from] TripleError),

    #[error("objective is NaN at x = {x}")]
    NanObjective { x: f64 },

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
            EvalError::NanObjective { x } => Self::NanObjective { x },
        }
    }
}
