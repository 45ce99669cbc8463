//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use survey_core::FoolRateError;
use survey_core::model::{ItemPoolError, Phase};

/// Errors emitted by the survey session flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a selection is required before advancing")]
    InvalidInput,

    #[error("not enough items for the {phase} phase: requested {requested}, {available} available")]
    InsufficientPool {
        phase: Phase,
        requested: usize,
        available: usize,
    },

    #[error("fool rate is undefined without comparison responses")]
    EmptyResponseSet,

    #[error("{action} is not valid during the {phase} phase")]
    UnexpectedAction { phase: Phase, action: &'static str },

    #[error("survey already completed")]
    Completed,

    #[error(transparent)]
    Pool(#[from] ItemPoolError),
}

impl From<FoolRateError> for SessionError {
    fn from(err: FoolRateError) -> Self {
        match err {
            FoolRateError::EmptyResponseSet => SessionError::EmptyResponseSet,
        }
    }
}

/// Errors emitted while building or saving the result table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv writer: {0}")]
    Flush(String),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
