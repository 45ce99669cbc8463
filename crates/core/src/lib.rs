#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fool_rate;
pub mod model;

pub use config::{ItemSelection, SurveyConfig, SurveyConfigDraft, SurveyConfigError};
pub use error::Error;
pub use fool_rate::{FoolRate, FoolRateError};
