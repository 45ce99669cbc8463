use thiserror::Error;

use crate::config::SurveyConfigError;
use crate::fool_rate::FoolRateError;
use crate::model::{ItemPoolError, ParseAnswerError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pool(#[from] ItemPoolError),
    #[error(transparent)]
    Config(#[from] SurveyConfigError),
    #[error(transparent)]
    FoolRate(#[from] FoolRateError),
    #[error(transparent)]
    Answer(#[from] ParseAnswerError),
}
