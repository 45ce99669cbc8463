#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod export_service;
pub mod sessions;

pub use error::{ExportError, SessionError};
pub use export::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, NOT_APPLICABLE, ResultExporter, ResultRow, ResultTable,
};
pub use export_service::ExportService;
pub use sessions::{
    COMPARISON_QUESTION_TEXT, ComparisonPrompt, ImagePanel, PRESERVATION_PROBLEMS_TEXT,
    PRESERVATION_QUESTION_TEXT, PreservationPrompt, QuestionSetBuilder, QuestionSets,
    SurveyAction, SurveyController, SurveyOutcome, SurveyProgress, SurveyScreen, SurveySession,
};
